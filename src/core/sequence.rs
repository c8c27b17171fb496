use std::ops::AddAssign;

/// Fills `out` with `x0, x0 + dx, x0 + 2*dx, ...`.
pub fn iota_delta<T>(out: &mut [T], x0: T, dx: T)
where
    T: Copy + AddAssign,
{
    let mut value = x0;
    for slot in out {
        *slot = value;
        value += dx;
    }
}

/// Like [`iota_delta`] but stores `f(step)` for every step value.
pub fn iota_delta_map<T, F>(out: &mut [T], x0: T, dx: T, mut f: F)
where
    T: Copy + AddAssign,
    F: FnMut(T) -> T,
{
    let mut value = x0;
    for slot in out {
        *slot = f(value);
        value += dx;
    }
}
