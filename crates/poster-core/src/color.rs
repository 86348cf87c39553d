/// An opaque 8-bit RGB color.
///
/// Parsed from `#RRGGBB` (or the `#RGB` shorthand) and always displayed as
/// lowercase `#rrggbb`, which is what a color picker hands back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    #[inline]
    #[must_use]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = crate::errors::PosterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::errors::PosterError::InvalidColor(value.to_string());

        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;

        // `from_str_radix` tolerates a leading '+', so validate digits up front.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // "#abc" is shorthand for "#aabbcc"
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PosterError;

    #[test]
    fn test_parse_long_form() {
        assert_eq!("#1a2B3c".parse::<Rgb>().unwrap(), Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!("#000".parse::<Rgb>().unwrap(), Rgb::BLACK);
        assert_eq!("#f80".parse::<Rgb>().unwrap(), Rgb::new(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "000000", "#00000", "#gg0000", "#+f+f+f", "#ééé", "#0000000"] {
            assert_eq!(
                bad.parse::<Rgb>(),
                Err(PosterError::InvalidColor(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_is_lowercase_long_form() {
        assert_eq!(Rgb::from_hex(0xF8F9FA).to_string(), "#f8f9fa");
        assert_eq!("#ABC".parse::<Rgb>().unwrap().to_string(), "#aabbcc");
    }
}
