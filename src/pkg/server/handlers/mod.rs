pub mod evaluate;
pub mod probes;
