//! # Zodiac mapping
//!
//! Tropical signs of 30° each starting at the vernal equinox, and the classical
//! element and modality of every sign. Elements repeat every four signs (Fire, Earth,
//! Air, Water) and modalities every three (Cardinal, Fixed, Mutable).
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{constants::Degree, time::normalize_degrees};

/// Width of a sign in degrees.
pub const SIGN_WIDTH: Degree = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Signs in ecliptic order, index 0 = Aries.
pub const SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Elements in the order used for grouping and tie-breaking.
pub const ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

/// Modalities in the order used for grouping and tie-breaking.
pub const MODALITIES: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

impl ZodiacSign {
    /// Sign for an index, taken modulo 12.
    pub fn from_index(index: usize) -> Self {
        SIGNS[index % 12]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    pub fn element(&self) -> Element {
        ELEMENTS[self.index() % 4]
    }

    pub fn modality(&self) -> Modality {
        MODALITIES[self.index() % 3]
    }

    /// Ecliptic longitude of the first degree of the sign.
    pub fn start_longitude(&self) -> Degree {
        self.index() as f64 * SIGN_WIDTH
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A longitude expressed as sign plus degree within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Degree within the sign, `[0, 30)`.
    pub degree: Degree,
}

impl ZodiacPosition {
    /// Map an ecliptic longitude (any range) to its sign and degree.
    pub fn from_longitude(longitude: Degree) -> Self {
        let lon = normalize_degrees(longitude);
        let index = (lon / SIGN_WIDTH).floor() as usize % 12;
        let degree = lon % SIGN_WIDTH;
        ZodiacPosition {
            sign: ZodiacSign::from_index(index),
            degree,
        }
    }

    /// Ecliptic longitude back from sign and degree.
    pub fn longitude(&self) -> Degree {
        self.sign.start_longitude() + self.degree
    }
}

impl fmt::Display for ZodiacPosition {
    /// `12°34′ Leo`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.degree.floor();
        let minutes = ((self.degree - whole) * 60.0).floor();
        write!(f, "{}°{:02}′ {}", whole as u32, minutes as u32, self.sign)
    }
}
