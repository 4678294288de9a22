use druid::kurbo::Point;
use std::f64::consts::{FRAC_PI_4, PI};

/// Radii of the three electron shells of sodium, innermost first.
pub const ORBIT_RADII: [f64; 3] = [40.0, 80.0, 120.0];

/// Radius of the nucleus disc.
pub const NUCLEUS_RADIUS: f64 = 20.0;

/// Radius of an electron dot.
pub const ELECTRON_RADIUS: f64 = 5.0;

/// Angle advanced per frame, in radians. Shared by every electron.
pub const ANGULAR_SPEED: f64 = 0.05;

/// Nucleus descriptor. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Nucleus {
    /// Center of the nucleus, fixed at construction from the initial
    /// window dimensions (resize is not handled).
    pub center: Point,
    /// Radius of the nucleus disc
    pub radius: f64,
    /// Element symbol drawn over the nucleus
    pub label: &'static str,
}

/// One electron: which orbit it rides and where on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Electron {
    /// Index into the orbit radii; always < ORBIT_RADII.len()
    pub orbit: usize,
    /// Angular position in radians. Unbounded: never wrapped to
    /// [0, 2π), since it is only ever fed to cos/sin.
    pub angle: f64,
}

/// The full atom model: nucleus, shell radii, and electron positions.
/// Only the electron angles ever change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub nucleus: Nucleus,
    pub orbits: [f64; 3],
    pub electrons: Vec<Electron>,
}

impl Atom {
    /// Builds a sodium atom centered at `center`, with its electrons
    /// distributed 2/8/1 across the three shells: the two K-shell
    /// electrons opposite each other, the eight L-shell electrons at
    /// multiples of π/4, and the lone valence electron at angle 0.
    pub fn sodium(center: Point) -> Self {
        let mut electrons = Vec::with_capacity(11);
        for i in 0..2 {
            electrons.push(Electron {
                orbit: 0,
                angle: i as f64 * PI,
            });
        }
        for i in 0..8 {
            electrons.push(Electron {
                orbit: 1,
                angle: i as f64 * FRAC_PI_4,
            });
        }
        electrons.push(Electron {
            orbit: 2,
            angle: 0.0,
        });

        Atom {
            nucleus: Nucleus {
                center,
                radius: NUCLEUS_RADIUS,
                label: "Na",
            },
            orbits: ORBIT_RADII,
            electrons,
        }
    }

    /// Advances every electron by the fixed angular speed. The only
    /// state mutation in the system; called once per frame.
    pub fn update(&mut self) {
        for electron in &mut self.electrons {
            electron.angle += ANGULAR_SPEED;
        }
    }

    /// Computes an electron's screen position from its orbit radius
    /// and current angle, relative to the nucleus.
    pub fn electron_position(&self, electron: &Electron) -> Point {
        let radius = self.orbits[electron.orbit];
        Point::new(
            self.nucleus.center.x + radius * electron.angle.cos(),
            self.nucleus.center.y + radius * electron.angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    const EPS: f64 = 1e-9;

    fn test_atom() -> Atom {
        Atom::sodium(Point::new(100.0, 100.0))
    }

    #[test]
    fn electron_counts_match_sodium_shells() {
        let atom = test_atom();
        assert_eq!(atom.electrons.len(), 11);
        for (orbit, expected) in [(0, 2), (1, 8), (2, 1)] {
            let count = atom.electrons.iter().filter(|e| e.orbit == orbit).count();
            assert_eq!(count, expected, "orbit {orbit}");
        }
    }

    #[test]
    fn orbit_indices_stay_in_range() {
        let atom = test_atom();
        assert!(atom.electrons.iter().all(|e| e.orbit < atom.orbits.len()));
    }

    #[test]
    fn initial_angles_are_evenly_spaced_per_shell() {
        let atom = test_atom();
        let angles = |orbit: usize| -> Vec<f64> {
            atom.electrons
                .iter()
                .filter(|e| e.orbit == orbit)
                .map(|e| e.angle)
                .collect()
        };

        assert_eq!(angles(0), vec![0.0, PI]);
        let expected: Vec<f64> = (0..8).map(|i| i as f64 * FRAC_PI_4).collect();
        assert_eq!(angles(1), expected);
        assert_eq!(angles(2), vec![0.0]);
    }

    #[test]
    fn update_advances_every_angle_by_the_speed_constant() {
        let mut atom = test_atom();
        let initial: Vec<f64> = atom.electrons.iter().map(|e| e.angle).collect();

        let steps = 40;
        for _ in 0..steps {
            atom.update();
        }

        for (electron, start) in atom.electrons.iter().zip(&initial) {
            let expected = start + steps as f64 * ANGULAR_SPEED;
            assert!(
                (electron.angle - expected).abs() < EPS,
                "orbit {} angle {} expected {}",
                electron.orbit,
                electron.angle,
                expected
            );
        }
    }

    #[test]
    fn position_formula_on_cardinal_angles() {
        let atom = test_atom();

        // Spot checks from known (orbit, angle) pairs with the
        // nucleus at (100, 100).
        let cases = [
            (0, 0.0, Point::new(140.0, 100.0)),
            (1, PI / 2.0, Point::new(100.0, 180.0)),
            (2, PI, Point::new(-20.0, 100.0)),
        ];
        for (orbit, angle, expected) in cases {
            let pos = atom.electron_position(&Electron { orbit, angle });
            assert!((pos.x - expected.x).abs() < EPS, "x for orbit {orbit}");
            assert!((pos.y - expected.y).abs() < EPS, "y for orbit {orbit}");
        }

        // The full grid: every orbit radius at each cardinal angle.
        for (orbit, &radius) in ORBIT_RADII.iter().enumerate() {
            for angle in [0.0, PI / 2.0, PI, 3.0 * PI / 2.0] {
                let pos = atom.electron_position(&Electron { orbit, angle });
                assert!((pos.x - (100.0 + radius * angle.cos())).abs() < EPS);
                assert!((pos.y - (100.0 + radius * angle.sin())).abs() < EPS);
            }
        }
    }

    #[test]
    fn reading_positions_mutates_nothing() {
        // electron_position takes &self, but make the no-mutation
        // claim explicit: reading every position changes nothing,
        // while update is the one operation that does.
        let mut atom = test_atom();
        let before = atom.clone();
        for electron in &atom.electrons {
            let _ = atom.electron_position(electron);
        }
        assert_eq!(atom, before);
        atom.update();
        assert_ne!(atom, before);
    }

    #[test]
    fn accumulated_angle_stays_trigonometrically_accurate() {
        let mut atom = test_atom();
        for _ in 0..100_000 {
            atom.update();
        }

        for electron in &atom.electrons {
            let reduced = electron.angle % TAU;
            assert!((electron.angle.cos() - reduced.cos()).abs() < 1e-6);
            assert!((electron.angle.sin() - reduced.sin()).abs() < 1e-6);
        }
    }
}
