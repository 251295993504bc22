//! Dimensioned quantities.
//!
//! Every intermediate value in the calculators carries its unit in its type.
//! Conversions between scales are named methods (`to_square_centimeters`,
//! `to_kilograms`, ...) so that a missing `/ 100` or `* 1000` shows up as a
//! type error rather than a silently wrong number.

use std::fmt;
use std::ops::{Add, Div, Mul};

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub f64);

        impl $name {
            /// Raw magnitude.
            #[must_use]
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

quantity!(
    /// Length in millimetres.
    Millimeters
);
quantity!(
    /// Length in centimetres.
    Centimeters
);
quantity!(
    /// Length in metres.
    Meters
);
quantity!(
    /// Area in mm².
    SquareMillimeters
);
quantity!(
    /// Area in cm².
    SquareCentimeters
);
quantity!(
    /// Volume in cm³.
    CubicCentimeters
);
quantity!(
    /// Weld volume per metre of joint, in cm³/m.
    CubicCentimetersPerMeter
);
quantity!(
    /// Density in g/cm³.
    GramsPerCubicCentimeter
);
quantity!(
    /// Mass in grams.
    Grams
);
quantity!(
    /// Mass in kilograms.
    Kilograms
);
quantity!(
    /// Weld mass per metre of joint, in kg/m.
    KilogramsPerMeter
);
quantity!(
    /// Angle in degrees.
    Degrees
);
quantity!(
    /// Percentage in the 0-100 range.
    Percent
);
quantity!(
    /// Duration in hours.
    Hours
);
quantity!(
    /// Travel speed in m/h.
    MetersPerHour
);
quantity!(
    /// Amount of money in the configured currency.
    Money
);
quantity!(
    /// Price per kilogram.
    MoneyPerKilogram
);
quantity!(
    /// Price per metre of weld.
    MoneyPerMeter
);
quantity!(
    /// Rate per hour.
    MoneyPerHour
);

impl Meters {
    /// Convert to centimetres.
    #[must_use]
    pub fn to_centimeters(self) -> Centimeters {
        Centimeters(self.0 * 100.0)
    }
}

impl SquareMillimeters {
    /// Convert to cm² (100 mm² per cm²).
    #[must_use]
    pub fn to_square_centimeters(self) -> SquareCentimeters {
        SquareCentimeters(self.0 / 100.0)
    }
}

impl Grams {
    /// Convert to kilograms.
    #[must_use]
    pub fn to_kilograms(self) -> Kilograms {
        Kilograms(self.0 / 1000.0)
    }
}

impl Degrees {
    /// Convert to radians.
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl Percent {
    /// Fraction in the 0-1 range.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl CubicCentimeters {
    /// Interpret a volume deposited over one metre of joint as a linear volume.
    #[must_use]
    pub fn per_meter(self) -> CubicCentimetersPerMeter {
        CubicCentimetersPerMeter(self.0)
    }
}

impl Kilograms {
    /// Interpret a mass deposited over one metre of joint as a linear mass.
    #[must_use]
    pub fn per_meter(self) -> KilogramsPerMeter {
        KilogramsPerMeter(self.0)
    }

    /// Mass that must be consumed so that `efficiency` of it ends up deposited.
    #[must_use]
    pub fn before_losses(self, efficiency: Percent) -> Kilograms {
        Kilograms(self.0 / efficiency.fraction())
    }
}

impl Mul for Millimeters {
    type Output = SquareMillimeters;

    fn mul(self, rhs: Self) -> SquareMillimeters {
        SquareMillimeters(self.0 * rhs.0)
    }
}

impl Add for SquareMillimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for SquareMillimeters {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Centimeters> for SquareCentimeters {
    type Output = CubicCentimeters;

    fn mul(self, rhs: Centimeters) -> CubicCentimeters {
        CubicCentimeters(self.0 * rhs.0)
    }
}

impl Mul<GramsPerCubicCentimeter> for CubicCentimeters {
    type Output = Grams;

    fn mul(self, rhs: GramsPerCubicCentimeter) -> Grams {
        Grams(self.0 * rhs.0)
    }
}

impl Div<MetersPerHour> for Meters {
    type Output = Hours;

    fn div(self, rhs: MetersPerHour) -> Hours {
        Hours(self.0 / rhs.0)
    }
}

impl Mul<MoneyPerKilogram> for Kilograms {
    type Output = Money;

    fn mul(self, rhs: MoneyPerKilogram) -> Money {
        Money(self.0 * rhs.0)
    }
}

impl Mul<MoneyPerHour> for Hours {
    type Output = Money;

    fn mul(self, rhs: MoneyPerHour) -> Money {
        Money(self.0 * rhs.0)
    }
}

impl Mul<MoneyPerMeter> for Meters {
    type Output = Money;

    fn mul(self, rhs: MoneyPerMeter) -> Money {
        Money(self.0 * rhs.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for SquareMillimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mm²", self.0)
    }
}

impl fmt::Display for CubicCentimetersPerMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} cm³/m", self.0)
    }
}

impl fmt::Display for KilogramsPerMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} kg/m", self.0)
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} kg", self.0)
    }
}
