use log::{debug, trace};

use crate::{Error, Result};

/// Return the smallest and largest value of `values` as `(min, max)`.
///
/// The input is consumed in a single pass, so any iterator works,
/// not only collections that can be traversed twice.
pub fn min_max<I>(values: I) -> Result<(I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        debug!("min_max called with an empty input");
        return Err(Error::EmptyInput);
    };

    let mut count = 1usize;
    let (min, max) = values.fold((first.clone(), first), |(min, max), value| {
        count += 1;
        if value < min {
            (value, max)
        } else if value > max {
            (min, value)
        } else {
            (min, max)
        }
    });

    trace!("min_max scanned {count} values");
    Ok((min, max))
}
