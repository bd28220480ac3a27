/// Images per gallery request, rendered by the UI as a 2x2 grid.
pub const GALLERY_SIZE: usize = 4;
