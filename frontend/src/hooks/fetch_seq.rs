use std::cell::RefCell;
use std::rc::Rc;

/// Shared sequence number over a family of in-flight fetches. Each new
/// request takes the next number with `begin`; a response may only be
/// applied while its number `is_current`, so a late response from a
/// superseded request is discarded instead of overwriting newer data.
#[derive(Clone, Default)]
pub struct FetchSeq(Rc<RefCell<u64>>);

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones.
    pub fn begin(&self) -> u64 {
        let mut current = self.0.borrow_mut();
        *current += 1;
        *current
    }

    /// True while `seq` belongs to the newest request.
    pub fn is_current(&self, seq: u64) -> bool {
        *self.0.borrow() == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sole_request_stays_current() {
        let seq = FetchSeq::new();
        let first = seq.begin();
        assert!(seq.is_current(first));
    }

    #[test]
    fn superseded_request_is_rejected() {
        let seq = FetchSeq::new();
        let first = seq.begin();
        let second = seq.begin();

        // The older response arrives after the newer request started; only
        // the newest one may be applied, regardless of arrival order.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_one_sequence() {
        let seq = FetchSeq::new();
        let handle = seq.clone();

        let first = seq.begin();
        let second = handle.begin();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(handle.is_current(second));
    }
}
