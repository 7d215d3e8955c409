/// Everything that can spoil a map session.
///
/// At the binary surface every variant collapses into the same fixed
/// diagnostic line; the distinctions exist for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("header shorter than four characters")]
    HeaderTooShort,

    #[error("header has no row-count digits")]
    MissingRowCount,

    #[error("declared row count does not fit in a machine word")]
    RowCountOverflow,

    #[error("declared row count is zero")]
    ZeroRowCount,

    #[error("marker characters are not pairwise distinct")]
    DuplicateMarkers,

    #[error("unprintable byte 0x{0:02x}")]
    UnprintableByte(u8),

    #[error("byte 0x{0:02x} is not a map character")]
    ForeignByte(u8),

    #[error("row {0} does not match the previous row's length")]
    RowLengthMismatch(usize),

    #[error("more rows than the header declares")]
    TooManyRows,

    #[error("map ends before every declared row is terminated")]
    TruncatedMap,

    #[error("could not reserve storage for {0} rows")]
    StorageExhausted(usize),

    #[error("grid failed its structural audit")]
    CorruptGrid,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
