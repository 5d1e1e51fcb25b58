//! Places a navigation strip can be mounted on.

use crate::format::strip_to_html;
use crate::navigation::NavStrip;
use std::collections::HashMap;
use tracing::debug;

/// Resolves a controls target to a live UI location and mounts strips there.
pub trait StripHost {
    /// Mount `strip` at `target`, replacing whatever was there.
    ///
    /// Returns `false` when `target` does not resolve; nothing is mounted.
    fn mount(&mut self, target: &str, strip: &NavStrip) -> bool;
}

/// Host without any live location. Every mount is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedHost;

impl StripHost for DetachedHost {
    fn mount(&mut self, _target: &str, _strip: &NavStrip) -> bool {
        false
    }
}

/// Named containers, each holding the last strip mounted into it.
#[derive(Debug, Default, Clone)]
pub struct ContainerHost {
    containers: HashMap<String, Option<NavStrip>>,
}

impl ContainerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with a single registered container.
    pub fn with_container(id: &str) -> Self {
        let mut host = Self::new();
        host.register(id);
        host
    }

    /// Make `id` a live location. An existing container keeps its content.
    pub fn register(&mut self, id: &str) {
        self.containers.entry(id.to_string()).or_insert(None);
    }

    /// Drop a container; later mounts into it are skipped.
    pub fn remove(&mut self, id: &str) -> Option<NavStrip> {
        self.containers.remove(id).flatten()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// The strip currently mounted in `id`, if any.
    pub fn strip(&self, id: &str) -> Option<&NavStrip> {
        self.containers.get(id).and_then(Option::as_ref)
    }

    /// Markup of the strip currently mounted in `id`.
    pub fn html(&self, id: &str) -> Option<String> {
        self.strip(id).map(strip_to_html)
    }
}

impl StripHost for ContainerHost {
    fn mount(&mut self, target: &str, strip: &NavStrip) -> bool {
        match self.containers.get_mut(target) {
            Some(slot) => {
                *slot = Some(strip.clone());
                true
            }
            None => {
                debug!(container = %target, "Controls container not found, skipping strip");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_into_registered_container() {
        let mut host = ContainerHost::with_container("pagination");
        let strip = NavStrip::new(1, 2, 30);
        assert!(host.mount("pagination", &strip));
        assert_eq!(host.strip("pagination"), Some(&strip));
        assert!(host.html("pagination").unwrap().contains("btn-page active"));
    }

    #[test]
    fn skips_unknown_container() {
        let mut host = ContainerHost::new();
        assert!(!host.mount("pagination", &NavStrip::new(1, 1, 0)));
        assert!(host.strip("pagination").is_none());
        assert!(!host.contains("pagination"));
    }

    #[test]
    fn removed_container_stops_receiving() {
        let mut host = ContainerHost::with_container("pagination");
        assert!(host.mount("pagination", &NavStrip::new(1, 1, 3)));
        assert!(host.remove("pagination").is_some());
        assert!(!host.mount("pagination", &NavStrip::new(1, 1, 3)));
    }

    #[test]
    fn detached_host_never_mounts() {
        let mut host = DetachedHost;
        assert!(!host.mount("pagination", &NavStrip::new(1, 1, 0)));
    }
}
