/// A cell position as `(x, y)`.
pub type Coord = (u16, u16);

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn xy_i((x, y): Coord, w: u16, h: u16) -> Option<usize> {
    if w <= x || h <= y {
        None
    } else {
        Some(y as usize * w as usize + x as usize)
    }
}

pub fn i_xy(index: usize, w: u16, h: u16) -> Option<Coord> {
    let ws = w as usize;
    let hs = h as usize;
    if index >= (ws * hs) {
        None
    } else {
        Some(((index % ws) as u16, (index / ws) as u16))
    }
}

/// The in-bounds cells around `(x, y)`, never including `(x, y)` itself.
pub fn valid_neighbors((x, y): Coord, w: u16, h: u16) -> impl Iterator<Item = Coord> {
    let dirs: &'static [(i8, i8)] = &DIRS_8;
    dirs.iter()
        .filter_map(move |&(dx, dy)| {
            let i = x.checked_add_signed(dx as i16)?;
            let j = y.checked_add_signed(dy as i16)?;
            Some((i, j))
        })
        .filter(move |&(i, j)| w > i && h > j)
}
