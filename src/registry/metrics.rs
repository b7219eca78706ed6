use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct RegistryMetrics {
    pub lookup_hit: Counter,
    pub lookup_miss: Counter,
    pub install: Counter,
    pub remove: Counter,
}

const REGISTRY: &str = "registry";
const OUTCOME: &str = "outcome";
const OPERATION: &str = "operation";

impl RegistryMetrics {
    pub fn new(registry_name: &str) -> Self {
        let labels = Labels::new(&[(REGISTRY, registry_name.to_owned())]);
        RegistryMetrics {
            lookup_hit: counter!(
                "registry.lookups",
                labels.clone_with_labels(&[(OUTCOME, "hit")])
            ),
            lookup_miss: counter!(
                "registry.lookups",
                labels.clone_with_labels(&[(OUTCOME, "miss")])
            ),
            install: counter!(
                "registry.mutations",
                labels.clone_with_labels(&[(OPERATION, "install")])
            ),
            remove: counter!(
                "registry.mutations",
                labels.clone_with_labels(&[(OPERATION, "remove")])
            ),
        }
    }
}
