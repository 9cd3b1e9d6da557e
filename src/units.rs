// Copyright (c) 2025 Orthodrome Developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The units module contains the [`UnitSystem`] selector used to choose the
//! units of a calculated distance.

/// The number of kilometres in a statute mile.
pub const KILOMETRES_PER_MILE: f64 = 1.609_344;

/// The number of metres in a kilometre.
pub const METRES_PER_KILOMETRE: f64 = 1000.0;

/// The units in which a distance is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// International System of Units: kilometres.
    #[default]
    Si,
    /// United States customary units: statute miles.
    Us,
}

impl UnitSystem {
    /// Convert a distance in kilometres into this unit system.
    /// * `km` - the distance in kilometres.
    /// # Examples
    /// ```
    /// use orthodrome::UnitSystem;
    ///
    /// assert_eq!(1.0, UnitSystem::Us.convert_kilometres(1.609_344));
    /// assert_eq!(42.0, UnitSystem::Si.convert_kilometres(42.0));
    /// ```
    #[must_use]
    pub fn convert_kilometres(self, km: f64) -> f64 {
        match self {
            Self::Si => km,
            Self::Us => km / KILOMETRES_PER_MILE,
        }
    }

    /// Convert a distance in metres into this unit system.
    /// * `metres` - the distance in metres.
    #[must_use]
    pub fn convert_metres(self, metres: crate::Metres) -> f64 {
        self.convert_kilometres(metres.0 / METRES_PER_KILOMETRE)
    }

    /// The abbreviation of the distance unit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Si => "km",
            Self::Us => "mi",
        }
    }
}

/// Zero selects [`UnitSystem::Si`], any other value [`UnitSystem::Us`].
impl From<u8> for UnitSystem {
    fn from(code: u8) -> Self {
        if code == 0 {
            Self::Si
        } else {
            Self::Us
        }
    }
}
