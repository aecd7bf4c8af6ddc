use std::hash::Hasher;

use fnv::FnvHasher;
use serde::{Deserialize, Serialize};

use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::fractals::registry::RegistryKind;
use crate::core::tiles::tile_address::TileAddress;

/// Every setting besides the address that changes a tile's pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TileParams {
    pub params: MandelbrotParams,
    pub selection: ColourSelection,
}

impl TileParams {
    pub fn new(params: MandelbrotParams, selection: ColourSelection) -> Self {
        Self { params, selection }
    }

    /// FNV-1a over the iteration settings and the algorithm identifiers.
    ///
    /// Stable across processes and builds, unlike `std`'s randomly seeded hasher.
    pub fn params_hash(&self) -> u64 {
        let mut hasher = FnvHasher::default();

        hasher.write_u32(self.params.max_iterations());
        hasher.write_u64(self.params.bailout().to_bits());
        hasher.write_u32(self.params.power());

        for identifier in [
            self.selection.colouring.identifier(),
            self.selection.colour_index.identifier(),
            self.selection.palette.identifier(),
        ] {
            hasher.write(identifier.as_bytes());
            hasher.write_u8(0);
        }

        hasher.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub address: TileAddress,
    pub params_hash: u64,
}

impl TileKey {
    pub fn new(address: TileAddress, params: &TileParams) -> Self {
        Self {
            address,
            params_hash: params.params_hash(),
        }
    }
}
