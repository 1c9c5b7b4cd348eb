//! Generator of stepped values series.

/// Arithmetic progression `start, start + step, ...` limited by `end` (inclusively).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SeriesWithStep {
    next: Option<u32>,
    end: u32,
    step: u32,
}

impl SeriesWithStep {
    /// Panics if `step` is zero.
    #[inline]
    pub(crate) fn new(start: u32, end: u32, step: u32) -> Self {
        if step == 0 {
            panic!("step value is 0");
        }

        Self {
            next: Some(start),
            end,
            step,
        }
    }
}

impl Iterator for SeriesWithStep {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|v| *v <= self.end)?;
        self.next = current.checked_add(self.step);
        Some(current)
    }
}

/// Returns mask with bits of `[start, end]` set, modulo `step`.
///
/// Caller is responsible to ensure that `end` is less than 64.
pub(crate) fn bits(start: u32, end: u32, step: u32) -> u64 {
    if start > end {
        return 0;
    }

    if step == 1 {
        (u64::MAX >> (u64::BITS - 1 - end)) & (u64::MAX << start)
    } else {
        SeriesWithStep::new(start, end, step).fold(0, |acc, v| acc | 1 << v)
    }
}
