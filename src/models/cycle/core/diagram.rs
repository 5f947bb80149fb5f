//! Sampled p–v and T–s curves for an evaluated cycle.
//!
//! Only the data is produced here; drawing it is left to the caller.

use uom::si::{
    pressure::bar, specific_heat_capacity::joule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{State, model::PerfectGas};

use super::{Leg, ProcessKind, Solution};

/// Number of points sampled along a curved leg.
///
/// Isochoric and isobaric legs are straight on the p–v plane and use just
/// their two end points there.
pub const SAMPLES: usize = 100;

/// One leg drawn on one diagram, as `(x, y)` points in leg order.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub title: &'static str,
    pub kind: ProcessKind,
    pub points: Vec<(f64, f64)>,

    /// Samples left out of `points` because they could not be evaluated.
    pub dropped: usize,
}

/// Both diagrams of a cycle.
///
/// - `pv`: specific volume in m³/kg against pressure in bar
/// - `ts`: entropy in J/kg·K, zero at state 1, against temperature in K
///
/// Points that cannot be evaluated are left out and counted in
/// [`Curve::dropped`]. This happens on the T–s curve of a leg that crosses
/// absolute zero, which the solution also reports as a
/// [`Diagnostic::UndefinedEntropy`](super::Diagnostic::UndefinedEntropy) for
/// that leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub pv: [Curve; 4],
    pub ts: [Curve; 4],
}

impl Diagram {
    #[must_use]
    pub fn from_solution(solution: &Solution, gas: &PerfectGas) -> Self {
        let [s1, s2, s3, s4] = solution.states.map(|point| point.state);
        let ends = [(s1, s2), (s2, s3), (s3, s4), (s4, solution.closure.state)];

        let pv = std::array::from_fn(|i| pv_curve(&solution.legs[i], ends[i], gas));

        let mut entropy = 0.0;
        let ts = std::array::from_fn(|i| {
            let curve = ts_curve(&solution.legs[i], ends[i], entropy, gas);
            if let Some(&(s, _)) = curve.points.last() {
                entropy = s;
            }
            curve
        });

        Self { pv, ts }
    }
}

fn pv_curve(leg: &Leg, (a, b): (State, State), gas: &PerfectGas) -> Curve {
    let (v_a, p_a) = (
        a.volume.get::<cubic_meter_per_kilogram>(),
        a.pressure.get::<bar>(),
    );
    let v_b = b.volume.get::<cubic_meter_per_kilogram>();

    let points = match leg.kind {
        ProcessKind::Isentropic => linspace(v_a, v_b, SAMPLES)
            .map(|v| (v, p_a * (v_a / v).powf(gas.k())))
            .collect(),
        ProcessKind::Isothermal => linspace(v_a, v_b, SAMPLES)
            .map(|v| (v, p_a * v_a / v))
            .collect(),
        ProcessKind::Isochoric | ProcessKind::Isobaric => {
            vec![(v_a, p_a), (v_b, b.pressure.get::<bar>())]
        }
    };

    curve(leg, points)
}

fn ts_curve(leg: &Leg, (a, b): (State, State), s_a: f64, gas: &PerfectGas) -> Curve {
    let t_a = a.temperature.get::<kelvin>();
    let t_b = b.temperature.get::<kelvin>();

    let along_temperature = |c: f64| -> Vec<(f64, f64)> {
        linspace(t_a, t_b, SAMPLES)
            .map(|t| (s_a + c * (t / t_a).ln(), t))
            .collect()
    };

    let points = match leg.kind {
        ProcessKind::Isentropic => vec![(s_a, t_a), (s_a, t_b)],
        ProcessKind::Isochoric => along_temperature(gas.cv().get::<joule_per_kilogram_kelvin>()),
        ProcessKind::Isobaric => along_temperature(gas.cp().get::<joule_per_kilogram_kelvin>()),
        ProcessKind::Isothermal => {
            let r = gas.gas_constant().get::<joule_per_kilogram_kelvin>();
            let (p_a, v_a) = (
                a.pressure.get::<bar>(),
                a.volume.get::<cubic_meter_per_kilogram>(),
            );
            linspace(p_a, b.pressure.get::<bar>(), SAMPLES)
                .map(|p| (s_a + r * ((p_a * v_a / p) / v_a).ln(), t_a))
                .collect()
        }
    };

    curve(leg, points)
}

fn curve(leg: &Leg, samples: Vec<(f64, f64)>) -> Curve {
    let total = samples.len();
    let points: Vec<_> = samples
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    Curve {
        title: leg.title,
        kind: leg.kind,
        dropped: total - points.len(),
        points,
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(move |i| if i + 1 == n { end } else { start + step * i as f64 })
}
