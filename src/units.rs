#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// Pixel extents used when laying a maze out for a renderer.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Width(pub f32);
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Height(pub f32);
