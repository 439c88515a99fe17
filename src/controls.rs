/// Describes one input control of the user interface
///
/// The ranges belong to the interface only; [crate::Model] accepts any finite point.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,

    /// Snap to whole numbers
    pub integer: bool,
}

impl Slider {
    /// Social media duration in hours per day (0.0 to 24.0, default 4.0)
    pub fn duration() -> Self {
        Slider {
            label: "Social media duration (hours/day)",
            min: 0.0,
            max: 24.0,
            default: 4.0,
            integer: false,
        }
    }

    /// Number of times the apps are opened per day (0 to 50, default 20)
    pub fn frequency() -> Self {
        Slider {
            label: "App openings (per day)",
            min: 0.0,
            max: 50.0,
            default: 20.0,
            integer: true,
        }
    }

    /// Returns the value the slider would show for the requested one
    ///
    /// NaN falls back to the default value.
    pub fn accept(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let v = if self.integer { f64::round(value) } else { value };
        f64::clamp(v, self.min, self.max)
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_works() {
        let duration = Slider::duration();
        assert_eq!(duration.accept(4.25), 4.25);
        assert_eq!(duration.accept(-1.0), 0.0);
        assert_eq!(duration.accept(30.0), 24.0);
        assert_eq!(duration.accept(f64::NAN), 4.0);

        let frequency = Slider::frequency();
        assert_eq!(frequency.accept(20.4), 20.0);
        assert_eq!(frequency.accept(20.5), 21.0);
        assert_eq!(frequency.accept(99.0), 50.0);
        assert_eq!(frequency.accept(f64::NEG_INFINITY), 0.0);
    }
}
