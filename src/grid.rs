use crate::error::MapError;

/// The three characters the header assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Traversable cell.
    pub empty: u8,
    /// Blocked cell.
    pub obstacle: u8,
    /// Overlay character for the winning square.
    pub full: u8,
}

impl Markers {
    /// True when the three markers are pairwise distinct.
    pub fn distinct(&self) -> bool {
        self.empty != self.obstacle && self.empty != self.full && self.obstacle != self.full
    }

    /// True for bytes a data row may contain.
    pub fn is_cell(&self, byte: u8) -> bool {
        byte == self.empty || byte == self.obstacle
    }
}

/// A validated rectangular map.
///
/// Rows are owned here and nowhere else; a fully loaded grid holds exactly
/// `declared_rows` rows of identical width.
#[derive(Debug, Clone)]
pub struct Grid {
    declared_rows: usize,
    markers: Markers,
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// Fallibly reserves row storage for a freshly parsed header.
    ///
    /// A declared count too large to back with memory aborts the session
    /// instead of the process.
    pub(crate) fn reserve(declared_rows: usize, markers: Markers) -> Result<Self, MapError> {
        let mut rows = Vec::new();
        rows.try_reserve_exact(declared_rows)
            .map_err(|_| MapError::StorageExhausted(declared_rows))?;
        Ok(Self {
            declared_rows,
            markers,
            rows,
        })
    }

    pub(crate) fn push_row(&mut self, row: Vec<u8>) {
        self.rows.push(row);
    }

    /// Row count the header promised.
    pub fn declared_rows(&self) -> usize {
        self.declared_rows
    }

    pub fn markers(&self) -> Markers {
        self.markers
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Rows actually loaded.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Common row width, zero when no row has been loaded yet.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}
