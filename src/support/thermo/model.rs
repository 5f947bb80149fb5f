//! Thermodynamic property models.

pub mod ideal_gas_eos;
pub mod perfect_gas;

pub use perfect_gas::PerfectGas;
