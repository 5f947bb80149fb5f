use std::fmt;

use uom::si::{
    available_energy::kilojoule_per_kilogram, pressure::bar, ratio::percent,
    specific_heat_capacity::joule_per_kilogram_kelvin, specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use super::{Solution, StatePoint};

const LEG_NAMES: [&str; 4] = ["1-2", "2-3", "3-4", "4-1"];

/// Formats a result value for display.
///
/// Two decimals by default. Whole numbers drop the decimals, and values whose
/// tenths digit is zero get a third decimal so small magnitudes stay visible.
///
/// # Example
///
/// ```
/// use cycle_models::models::cycle::format_value;
///
/// assert_eq!(format_value(689.2185), "689.22");
/// assert_eq!(format_value(300.0), "300");
/// assert_eq!(format_value(0.0538), "0.054");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    let two = format!("{value:.2}");
    if two.ends_with("00") {
        return format!("{value:.0}");
    }
    if two.len() >= 2 && two.as_bytes()[two.len() - 2] == b'0' {
        return format!("{value:.3}");
    }
    two
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} cycle", self.cycle.kind())?;
        writeln!(
            f,
            "{:<6}{:>12}{:>12}{:>12}{:>12}{:>12}",
            "state", "T [K]", "p [bar]", "v [m3/kg]", "h [kJ/kg]", "s [J/kgK]"
        )?;
        for (i, point) in self.states.iter().enumerate() {
            write_state(f, i + 1, point)?;
        }

        writeln!(
            f,
            "{:<6}{:<26}{:>12}{:>12}{:>12}",
            "leg", "process", "q [kJ/kg]", "w [kJ/kg]", "u [kJ/kg]"
        )?;
        for (name, leg) in LEG_NAMES.iter().zip(&self.legs) {
            writeln!(
                f,
                "{:<6}{:<26}{:>12}{:>12}{:>12}",
                name,
                leg.title,
                format_value(leg.heat.get::<kilojoule_per_kilogram>()),
                format_value(leg.work.get::<kilojoule_per_kilogram>()),
                format_value(leg.internal_energy.get::<kilojoule_per_kilogram>()),
            )?;
        }

        write!(f, "efficiency: {:.2} %", self.efficiency.get::<percent>())
    }
}

fn write_state(f: &mut fmt::Formatter<'_>, number: usize, point: &StatePoint) -> fmt::Result {
    let entropy = point.entropy.map_or_else(
        || "undefined".to_owned(),
        |s| format_value(s.get::<joule_per_kilogram_kelvin>()),
    );
    writeln!(
        f,
        "{:<6}{:>12}{:>12}{:>12}{:>12}{:>12}",
        number,
        format_value(point.state.temperature.get::<kelvin>()),
        format_value(point.state.pressure.get::<bar>()),
        format_value(point.state.volume.get::<cubic_meter_per_kilogram>()),
        format_value(point.enthalpy.get::<kilojoule_per_kilogram>()),
        entropy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::cycle::core::{
        Cycle, CycleError, evaluate,
        test_support::{air, kj, otto_initial},
    };

    #[test]
    fn adaptive_precision() {
        assert_eq!(format_value(56.4724), "56.47");
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(-800.0), "-800");
        assert_eq!(format_value(12.05), "12.050");
        assert_eq!(format_value(0.0312), "0.031");
        assert_eq!(format_value(0.861), "0.86");
    }

    #[test]
    fn solution_table() -> Result<(), CycleError> {
        let solution = evaluate(&otto_initial(), &air(), &Cycle::otto(8.0, kj(800.0))?)?;
        let text = solution.to_string();

        assert!(text.starts_with("Otto cycle\n"));
        assert!(text.contains("1-2   Isentropic Compression"));
        assert!(text.contains("4-1   Isochoric Heat Output"));
        assert!(text.ends_with("efficiency: 56.47 %"));

        Ok(())
    }
}
