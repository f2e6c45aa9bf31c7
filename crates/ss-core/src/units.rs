// ss-core/src/units.rs

use crate::numeric::Real;
use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

// Pressures are gauge values throughout; uom has no gauge/absolute distinction.

#[inline]
pub fn bar_g(v: Real) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn psi_g(v: Real) -> Pressure {
    use uom::si::pressure::psi;
    Pressure::new::<psi>(v)
}

#[inline]
pub fn kpa_g(v: Real) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn degc(v: Real) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn degf(v: Real) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn k(v: Real) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn mps(v: Real) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn as_bar_g(p: Pressure) -> Real {
    use uom::si::pressure::bar;
    p.get::<bar>()
}

#[inline]
pub fn as_degc(t: Temperature) -> Real {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[inline]
pub fn as_mps(v: Velocity) -> Real {
    use uom::si::velocity::meter_per_second;
    v.get::<meter_per_second>()
}

/// Pressure units accepted on input. Values are converted to bar gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureUnit {
    #[default]
    Bar,
    Psi,
    KPa,
}

impl PressureUnit {
    /// Bar input is returned untouched so table boundaries compare exactly.
    pub fn to_bar_g(self, v: Real) -> Real {
        match self {
            PressureUnit::Bar => v,
            PressureUnit::Psi => as_bar_g(psi_g(v)),
            PressureUnit::KPa => as_bar_g(kpa_g(v)),
        }
    }
}

impl std::str::FromStr for PressureUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" | "barg" | "bar_g" => Ok(PressureUnit::Bar),
            "psi" | "psig" => Ok(PressureUnit::Psi),
            "kpa" | "kpag" => Ok(PressureUnit::KPa),
            _ => Err("unknown pressure unit"),
        }
    }
}

/// Temperature units accepted on input. Values are converted to degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn to_degc(self, v: Real) -> Real {
        match self {
            TemperatureUnit::Celsius => v,
            TemperatureUnit::Fahrenheit => as_degc(degf(v)),
            TemperatureUnit::Kelvin => as_degc(k(v)),
        }
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "degc" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "degf" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err("unknown temperature unit"),
        }
    }
}
