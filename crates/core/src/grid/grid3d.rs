//! Regular 3D Cartesian reservoir grid
//!
//! Holds cell counts, physical extents and the derived uniform spacing of a
//! box-shaped reservoir domain. Cells are addressed in row-major order:
//! `[iz * (ny * nx) + iy * nx + ix]`, matching the layout used for any
//! per-cell storage built on top of the grid.

use crate::error::{Result, SimulationError};
use crate::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Regular 3D Cartesian mesh of a reservoir domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid3D {
    /// Cell counts along x, y, z
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,

    /// Domain extents (m)
    pub lx: f64,
    pub ly: f64,
    pub lz: f64,

    /// Cell spacing (m), `l / n` per axis
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,

    /// Total cell count, `nx * ny * nz`
    pub n_cells: usize,
}

impl Grid3D {
    /// Create a grid without validating its inputs
    ///
    /// A zero count yields infinite (or NaN, for a zero extent) spacing and
    /// a zero cell count. Use [`Grid3D::try_new`] when inputs come from a
    /// user.
    pub fn new(nx: usize, ny: usize, nz: usize, lx: f64, ly: f64, lz: f64) -> Self {
        Grid3D {
            nx,
            ny,
            nz,
            lx,
            ly,
            lz,
            dx: lx / nx as f64,
            dy: ly / ny as f64,
            dz: lz / nz as f64,
            n_cells: nx * ny * nz,
        }
    }

    /// Create a grid, rejecting zero counts, non-positive or non-finite
    /// extents, and cell counts that overflow `usize`
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] naming the offending axis.
    pub fn try_new(nx: usize, ny: usize, nz: usize, lx: f64, ly: f64, lz: f64) -> Result<Self> {
        check_axis("x", nx, lx)?;
        check_axis("y", ny, ly)?;
        check_axis("z", nz, lz)?;
        Self::checked_cell_count(nx, ny, nz)?;

        let grid = Self::new(nx, ny, nz, lx, ly, lz);
        tracing::debug!("Created reservoir grid: {}", grid);
        Ok(grid)
    }

    /// Re-check the `try_new` invariants on an existing grid
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] for the first failing axis.
    pub fn validate(&self) -> Result<()> {
        check_axis("x", self.nx, self.lx)?;
        check_axis("y", self.ny, self.ly)?;
        check_axis("z", self.nz, self.lz)?;
        check_spacing("x", self.dx, self.lx, self.nx)?;
        check_spacing("y", self.dy, self.ly, self.ny)?;
        check_spacing("z", self.dz, self.lz, self.nz)?;
        let expected = Self::checked_cell_count(self.nx, self.ny, self.nz)?;
        if expected != self.n_cells {
            return Err(SimulationError::invalid_grid(
                "cells",
                format!("n_cells is {} but nx*ny*nz is {}", self.n_cells, expected),
            ));
        }
        Ok(())
    }

    /// `nx * ny * nz`, or an error when the product overflows `usize`
    ///
    /// [`Grid3D::new`] multiplies unchecked; callers that skip validation
    /// still need this before building.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] with axis `"cells"` on overflow.
    pub fn checked_cell_count(nx: usize, ny: usize, nz: usize) -> Result<usize> {
        nx.checked_mul(ny)
            .and_then(|layer| layer.checked_mul(nz))
            .ok_or_else(|| {
                SimulationError::invalid_grid(
                    "cells",
                    format!("{nx}x{ny}x{nz} overflows the addressable cell count"),
                )
            })
    }

    /// Cell spacing as a vector (m)
    pub fn spacing(&self) -> Vec3 {
        Vec3::new(self.dx, self.dy, self.dz)
    }

    /// Domain extents as a vector (m)
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.lx, self.ly, self.lz)
    }

    /// Cell counts as `[nx, ny, nz]`
    pub fn dims(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Get cell index from (x, y, z) indices
    #[inline]
    pub fn cell_index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        iz * (self.ny * self.nx) + iy * self.nx + ix
    }

    /// Inverse of [`Grid3D::cell_index`]
    pub fn cell_coords(&self, index: usize) -> Option<(usize, usize, usize)> {
        if index >= self.n_cells {
            return None;
        }
        let layer = self.nx * self.ny;
        let iz = index / layer;
        let rem = index % layer;
        Some((rem % self.nx, rem / self.nx, iz))
    }

    /// Whether (ix, iy, iz) addresses a cell of this grid
    #[inline]
    pub fn contains_cell(&self, ix: usize, iy: usize, iz: usize) -> bool {
        ix < self.nx && iy < self.ny && iz < self.nz
    }

    /// Cell center in world coordinates (bounds-checked)
    pub fn cell_center(&self, ix: usize, iy: usize, iz: usize) -> Option<Vec3> {
        self.contains_cell(ix, iy, iz)
            .then(|| self.center_unchecked(ix, iy, iz))
    }

    #[inline]
    fn center_unchecked(&self, ix: usize, iy: usize, iz: usize) -> Vec3 {
        Vec3::new(
            (ix as f64 + 0.5) * self.dx,
            (iy as f64 + 0.5) * self.dy,
            (iz as f64 + 0.5) * self.dz,
        )
    }

    /// Cell containing a world position, nearest-cell lookup
    ///
    /// Positions outside `[0, l)` on any axis return `None`.
    pub fn cell_at_position(&self, pos: Vec3) -> Option<(usize, usize, usize)> {
        let inside = (0.0..self.lx).contains(&pos.x)
            && (0.0..self.ly).contains(&pos.y)
            && (0.0..self.lz).contains(&pos.z);
        if !inside {
            return None;
        }

        let gx = (pos.x / self.dx).floor();
        let gy = (pos.y / self.dy).floor();
        let gz = (pos.z / self.dz).floor();

        if !(gx.is_finite() && gy.is_finite() && gz.is_finite()) {
            return None;
        }

        let (ix, iy, iz) = (gx as usize, gy as usize, gz as usize);
        self.contains_cell(ix, iy, iz).then_some((ix, iy, iz))
    }

    /// Volume of one cell (m³)
    pub fn cell_volume(&self) -> f64 {
        self.dx * self.dy * self.dz
    }

    /// Volume of the whole domain (m³)
    pub fn bulk_volume(&self) -> f64 {
        self.lx * self.ly * self.lz
    }

    /// All cell centers in `cell_index` order
    pub fn cell_centers(&self) -> Vec<Vec3> {
        (0..self.n_cells)
            .into_par_iter()
            .map(|idx| {
                let layer = self.nx * self.ny;
                let rem = idx % layer;
                self.center_unchecked(rem % self.nx, rem / self.nx, idx / layer)
            })
            .collect()
    }
}

impl fmt::Display for Grid3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{} cells over {}x{}x{} m",
            self.nx, self.ny, self.nz, self.lx, self.ly, self.lz
        )
    }
}

fn check_axis(axis: &'static str, n: usize, length: f64) -> Result<()> {
    if n == 0 {
        return Err(SimulationError::invalid_grid(axis, "cell count must be > 0"));
    }
    if !length.is_finite() {
        return Err(SimulationError::invalid_grid(
            axis,
            format!("extent must be finite, got {length}"),
        ));
    }
    if length <= 0.0 {
        return Err(SimulationError::invalid_grid(
            axis,
            format!("extent must be > 0, got {length}"),
        ));
    }
    Ok(())
}

fn check_spacing(axis: &'static str, spacing: f64, length: f64, n: usize) -> Result<()> {
    let expected = length / n as f64;
    if spacing != expected {
        return Err(SimulationError::invalid_grid(
            axis,
            format!("spacing is {spacing} but extent / count is {expected}"),
        ));
    }
    Ok(())
}
