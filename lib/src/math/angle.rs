use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use super::{Cos, Pi, RemEuclid, Sin, Two};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Angle<T> {
    value: T,
}

impl<T> Angle<T> {
    pub fn from_radians(value: T) -> Self {
        Self { value }
    }

    pub fn from_degrees(value: T) -> Self
    where
        T: Pi + Div<f64, Output = T> + Mul<Output = T>,
    {
        Self {
            value: value / 180. * T::pi(),
        }
    }

    /// Raw signed value as constructed, e.g. `atan2` output in -PI..=PI
    pub fn radians(self) -> T {
        self.value
    }

    /// Result in range 0..PI*2
    pub fn normalized_radians(self) -> T
    where
        T: Pi + Two + Mul<Output = T> + RemEuclid<Output = T>,
    {
        normalize_radians(self.value)
    }

    pub fn degrees(self) -> T
    where
        T: Pi + Div<Output = T> + Mul<f64, Output = T>,
    {
        self.value / T::pi() * 180.
    }

    pub fn cos(self) -> <T as Cos>::Output
    where
        T: Cos,
    {
        self.value.cos()
    }

    pub fn sin(self) -> <T as Sin>::Output
    where
        T: Sin,
    {
        self.value.sin()
    }
}

fn normalize_radians<T>(value: T) -> T
where
    T: Pi + Two + Mul<Output = T> + RemEuclid<Output = T>,
{
    value.rem_euclid(T::pi() * T::two())
}
