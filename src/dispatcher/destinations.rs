use std::collections::VecDeque;

/**
 * Supplies the destination floor of each passenger as it boards.
 *
 * The dispatcher asks once per boarding passenger, in boarding order.
 * Returning `None` means the source has no destination for that passenger,
 * which aborts the dispatch before anyone boards.
 */
pub trait DestinationSource {
    fn next_destination(&mut self, source_floor: i32) -> Option<i32>;
}

/// Destinations already known up front, consumed front to back.
impl DestinationSource for VecDeque<i32> {
    fn next_destination(&mut self, _source_floor: i32) -> Option<i32> {
        self.pop_front()
    }
}

impl<F> DestinationSource for F
where
    F: FnMut(i32) -> Option<i32>,
{
    fn next_destination(&mut self, source_floor: i32) -> Option<i32> {
        self(source_floor)
    }
}
