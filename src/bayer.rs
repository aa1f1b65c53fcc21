//! Bayer mosaic definitions.

use byteorder::{BigEndian, ByteOrder as Endianness};

use crate::{ConvertError, ConvertResult};

/// Output channel indices of an interleaved RGB pixel.
pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

/// The 2x2 colour filter tile of the sensor.
///
/// The sequence of R, G, B describe the colours of the top-left,
/// top-right, bottom-left, and bottom-right pixels in the 2x2 block,
/// in that order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BayerTile {
    RGGB,
    GBRG,
    GRBG,
    BGGR,
}

impl BayerTile {
    /// The 2x2 pixel block obtained when moving right 1 column.
    pub fn next_x(self) -> Self {
        match self {
            BayerTile::BGGR => BayerTile::GBRG,
            BayerTile::GBRG => BayerTile::BGGR,
            BayerTile::GRBG => BayerTile::RGGB,
            BayerTile::RGGB => BayerTile::GRBG,
        }
    }

    /// The 2x2 pixel block obtained when moving down 1 row.
    pub fn next_y(self) -> Self {
        match self {
            BayerTile::BGGR => BayerTile::GRBG,
            BayerTile::GBRG => BayerTile::RGGB,
            BayerTile::GRBG => BayerTile::BGGR,
            BayerTile::RGGB => BayerTile::GBRG,
        }
    }

    /// Output channel sampled by the sensor at `(x, y)`.
    pub fn color_at(self, x: usize, y: usize) -> usize {
        let tile = if y % 2 == 1 { self.next_y() } else { self };
        let tile = if x % 2 == 1 { tile.next_x() } else { tile };
        match tile {
            BayerTile::RGGB => RED,
            BayerTile::BGGR => BLUE,
            BayerTile::GBRG | BayerTile::GRBG => GREEN,
        }
    }
}

impl TryFrom<u32> for BayerTile {
    type Error = ConvertError;

    fn try_from(raw: u32) -> ConvertResult<Self> {
        let tile = match raw {
            512 => BayerTile::RGGB,
            513 => BayerTile::GBRG,
            514 => BayerTile::GRBG,
            515 => BayerTile::BGGR,
            _ => return Err(ConvertError::InvalidParameter("color filter")),
        };
        Ok(tile)
    }
}

/// Phase of one mosaic row.
///
/// Every interpolating demosaicer walks the image row by row and only needs
/// to know which colour the non-green samples of the current row carry, and
/// whether the row opens on a green sample. The four combinations are exactly
/// the four tiles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Phase {
    /// The red/blue samples of this row are blue.
    pub blue: bool,
    /// The first sample of this row is green.
    pub start_with_green: bool,
}

impl Phase {
    /// Phase of row 0.
    pub fn new(tile: BayerTile) -> Self {
        let (blue, start_with_green) = match tile {
            BayerTile::RGGB => (false, false),
            BayerTile::GRBG => (false, true),
            BayerTile::BGGR => (true, false),
            BayerTile::GBRG => (true, true),
        };
        Phase {
            blue,
            start_with_green,
        }
    }

    /// Phase of row `y`.
    pub fn at_row(tile: BayerTile, y: usize) -> Self {
        let phase = Phase::new(tile);
        if y % 2 == 1 {
            phase.next_row()
        } else {
            phase
        }
    }

    /// The phase one row down.
    pub fn next_row(self) -> Self {
        Phase {
            blue: !self.blue,
            start_with_green: !self.start_with_green,
        }
    }

    /// Whether column `x` of this row is a green sample.
    #[inline(always)]
    pub fn is_green(self, x: usize) -> bool {
        self.start_with_green != (x % 2 == 1)
    }

    /// Channel of the red/blue samples on this row.
    #[inline(always)]
    pub fn row_channel(self) -> usize {
        if self.blue {
            BLUE
        } else {
            RED
        }
    }

    /// Channel of the red/blue samples on the rows above and below.
    #[inline(always)]
    pub fn col_channel(self) -> usize {
        if self.blue {
            RED
        } else {
            BLUE
        }
    }
}

/// Decode big-endian 16-bit samples.
pub fn read_samples_u16(src: &[u8], dst: &mut [u16]) -> ConvertResult<()> {
    if src.len() != 2 * dst.len() {
        return Err(ConvertError::BufferSizeMismatch(2 * dst.len(), src.len()));
    }
    BigEndian::read_u16_into(src, dst);
    Ok(())
}

/// Encode 16-bit samples as big-endian bytes.
pub fn write_samples_u16(src: &[u16], dst: &mut [u8]) -> ConvertResult<()> {
    if dst.len() != 2 * src.len() {
        return Err(ConvertError::BufferSizeMismatch(2 * src.len(), dst.len()));
    }
    BigEndian::write_u16_into(src, dst);
    Ok(())
}
