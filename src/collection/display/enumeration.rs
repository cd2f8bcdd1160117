//! Index-based display adapter enumeration, as done by Windows'
//! `EnumDisplayDevices`.

use super::DisplayDescriptor;
use crate::collection::error::{HostInfoError, HostInfoResult};

/// One enumerated display adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAdapter {
    pub description: String,
    pub attached_to_desktop: bool,
    pub primary: bool,
}

impl DisplayAdapter {
    #[inline]
    fn is_primary_on_desktop(&self) -> bool {
        self.attached_to_desktop && self.primary
    }
}

/// Something that can list display adapters by index.
pub trait AdapterEnumerator {
    /// Returns the adapter at `index`, or [`None`] once there are no more
    /// adapters.
    fn adapter(&mut self, index: u32) -> Option<DisplayAdapter>;
}

/// Walks adapters from index 0 until one is both attached to the desktop and
/// primary, and returns its description.
///
/// Enumeration stops at the first match. Otherwise it only ends when the
/// enumerator runs out of adapters.
pub fn find_primary_adapter<E: AdapterEnumerator + ?Sized>(
    enumerator: &mut E,
) -> HostInfoResult<DisplayDescriptor> {
    let mut index = 0;

    while let Some(adapter) = enumerator.adapter(index) {
        if adapter.is_primary_on_desktop() {
            log::debug!("adapter {index} is the primary display adapter");

            return DisplayDescriptor::new(&adapter.description).ok_or_else(|| {
                HostInfoError::not_found("the primary adapter has an empty description")
            });
        }

        index = match index.checked_add(1) {
            Some(next) => next,
            None => break,
        };
    }

    Err(HostInfoError::not_found(
        "no adapter is both attached to the desktop and primary",
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    struct MockAdapters {
        adapters: Vec<DisplayAdapter>,
        requested: Vec<u32>,
    }

    impl MockAdapters {
        fn new(adapters: Vec<DisplayAdapter>) -> Self {
            Self {
                adapters,
                requested: Vec::new(),
            }
        }
    }

    impl AdapterEnumerator for MockAdapters {
        fn adapter(&mut self, index: u32) -> Option<DisplayAdapter> {
            self.requested.push(index);
            self.adapters.get(index as usize).cloned()
        }
    }

    fn adapter(description: &str, attached_to_desktop: bool, primary: bool) -> DisplayAdapter {
        DisplayAdapter {
            description: description.to_string(),
            attached_to_desktop,
            primary,
        }
    }

    #[test]
    fn stops_at_the_first_attached_primary_adapter() {
        let mut adapters = MockAdapters::new(vec![
            adapter("Microsoft Basic Display Adapter", true, false),
            adapter("NVIDIA GeForce RTX 3070", true, true),
            adapter("Intel(R) UHD Graphics 630", true, true),
        ]);

        let name = find_primary_adapter(&mut adapters).unwrap();

        assert_eq!(name.as_str(), "NVIDIA GeForce RTX 3070");
        assert_eq!(adapters.requested, vec![0, 1]);
    }

    #[test]
    fn primary_but_detached_does_not_count() {
        let mut adapters = MockAdapters::new(vec![
            adapter("Detached", false, true),
            adapter("Attached", true, false),
        ]);

        assert!(matches!(
            find_primary_adapter(&mut adapters),
            Err(HostInfoError::NotFound(_))
        ));
        assert_eq!(adapters.requested, vec![0, 1, 2]);
    }

    #[test]
    fn no_adapters() {
        let mut adapters = MockAdapters::new(vec![]);

        assert!(matches!(
            find_primary_adapter(&mut adapters),
            Err(HostInfoError::NotFound(_))
        ));
    }

    #[test]
    fn enumeration_has_no_fixed_cap() {
        let mut list: Vec<_> = (0..300)
            .map(|i| adapter(&format!("Adapter {i}"), false, false))
            .collect();
        list.push(adapter("Late primary", true, true));
        let mut adapters = MockAdapters::new(list);

        let name = find_primary_adapter(&mut adapters).unwrap();

        assert_eq!(name.as_str(), "Late primary");
    }

    #[test]
    fn empty_description_is_not_found() {
        let mut adapters = MockAdapters::new(vec![adapter("", true, true)]);

        assert!(matches!(
            find_primary_adapter(&mut adapters),
            Err(HostInfoError::NotFound(_))
        ));
    }
}
