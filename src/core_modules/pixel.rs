// THEORY:
// The `Pixel` module holds the one color value the option layer needs: a fill or
// background color handed to the filters. It is a "dumb" data container built
// directly on `image::Rgb<u8>` so that a parsed color can be written into an
// image buffer without any further conversion.
//
// Key principles:
// 1.  **Packed construction**: Colors given numerically on the command line are
//     packed `0xRRGGBB` values. `Pixel::from_value` unpacks them; any bits above
//     the low 24 are ignored.
// 2.  **Reserved constants**: `BLACK` and `WHITE` are the two colors that have a
//     symbolic spelling. Everything else is echoed as a `#rrggbb` triplet.
// 3.  **Equality is by channel**: two pixels are the same color iff their red,
//     green and blue channels match.

pub mod pixel {
    use image::{Rgb, Rgba};
    use std::fmt;

    pub type Byte = u8;
    pub type Channel = Byte;
    pub type PackedColor = u32;

    /// A single RGB color as consumed by the image filters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(from = "PackedColor", into = "PackedColor")
    )]
    pub struct Pixel(pub Rgb<Channel>);

    impl Pixel {
        pub const BLACK: Pixel = Pixel(Rgb([0, 0, 0]));
        pub const WHITE: Pixel = Pixel(Rgb([255, 255, 255]));

        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel(Rgb([red, green, blue]))
        }

        /// Unpacks a `0xRRGGBB` value. Bits above the low 24 are dropped.
        pub fn from_value(value: PackedColor) -> Self {
            Pixel::new(
                ((value >> 16) & 0xff) as Channel,
                ((value >> 8) & 0xff) as Channel,
                (value & 0xff) as Channel,
            )
        }

        pub fn to_value(&self) -> PackedColor {
            ((self.red() as PackedColor) << 16)
                | ((self.green() as PackedColor) << 8)
                | self.blue() as PackedColor
        }

        pub fn red(&self) -> Channel {
            self.0[0]
        }

        pub fn green(&self) -> Channel {
            self.0[1]
        }

        pub fn blue(&self) -> Channel {
            self.0[2]
        }
    }

    impl Default for Pixel {
        fn default() -> Self {
            Pixel::BLACK
        }
    }

    impl From<PackedColor> for Pixel {
        fn from(value: PackedColor) -> Self {
            Pixel::from_value(value)
        }
    }

    impl From<Pixel> for PackedColor {
        fn from(pixel: Pixel) -> Self {
            pixel.to_value()
        }
    }

    impl From<Pixel> for Rgb<Channel> {
        fn from(pixel: Pixel) -> Self {
            pixel.0
        }
    }

    /// Filters that work on RGBA buffers get a fully opaque color.
    impl From<Pixel> for Rgba<Channel> {
        fn from(pixel: Pixel) -> Self {
            Rgba([pixel.red(), pixel.green(), pixel.blue(), Channel::MAX])
        }
    }

    impl fmt::Display for Pixel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if *self == Pixel::BLACK {
                return f.write_str("black");
            }
            if *self == Pixel::WHITE {
                return f.write_str("white");
            }
            write!(f, "#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
        }
    }
}
