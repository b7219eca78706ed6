mod error;
mod iban;
mod metrics;
mod rule;
mod vatin;

pub use crate::registry::error::RegistryError;
pub use crate::registry::metrics::RegistryMetrics;
pub use crate::registry::rule::{RuleDefinition, RuleFamily, ValidatorRule, KEY_LEN};

use ahash::AHashMap;
use arc_swap::ArcSwap;
use lazy_static::lazy_static;
use std::sync::Arc;

type RuleMap = AHashMap<String, Arc<ValidatorRule>>;

lazy_static! {
    /// Every IBAN format known by default. Shared by all callers and never modified.
    pub static ref DEFAULT_IBAN_REGISTRY: FrozenRegistry = iban::default_iban_rules()
        .and_then(|rules| FrozenRegistry::new("iban", RuleFamily::Iban, rules))
        .expect("built-in IBAN formats are valid");

    /// Every VATIN format known by default. Shared by all callers and never modified.
    pub static ref DEFAULT_VATIN_REGISTRY: FrozenRegistry = vatin::default_vatin_rules()
        .and_then(|rules| FrozenRegistry::new("vatin", RuleFamily::Vatin, rules))
        .expect("built-in VATIN formats are valid");
}

/// Maps the classification key of a code, its first [`KEY_LEN`] characters, to the rule that
/// validates it.
pub trait Registry: Send + Sync {
    fn name(&self) -> &str;

    fn family(&self) -> RuleFamily;

    /// The rule for the key `code` starts with. Keys are case-sensitive.
    fn get(&self, code: &str) -> Option<Arc<ValidatorRule>>;

    /// Every rule, in key order.
    fn rules(&self) -> Vec<Arc<ValidatorRule>>;

    /// Adds `rule`, returning the rule it replaced.
    fn install(&self, rule: ValidatorRule) -> Result<Option<Arc<ValidatorRule>>, RegistryError>;

    fn remove(&self, key: &str) -> Result<Option<Arc<ValidatorRule>>, RegistryError>;

    fn has(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    fn is_valid(&self, code: &str) -> bool {
        self.get(code).is_some_and(|rule| rule.is_valid(code))
    }
}

fn lookup_key(code: &str) -> Option<&str> {
    code.get(..KEY_LEN)
}

fn lookup(rules: &RuleMap, code: &str, metrics: &RegistryMetrics) -> Option<Arc<ValidatorRule>> {
    match lookup_key(code).and_then(|key| rules.get(key)) {
        Some(rule) => {
            metrics.lookup_hit.increment(1);
            Some(Arc::clone(rule))
        }
        None => {
            metrics.lookup_miss.increment(1);
            None
        }
    }
}

fn sorted_rules(rules: &RuleMap) -> Vec<Arc<ValidatorRule>> {
    let mut rules: Vec<_> = rules.values().cloned().collect();
    rules.sort_by(|a, b| a.key().cmp(b.key()));
    rules
}

fn check_family(family: RuleFamily, rule: &ValidatorRule) -> Result<(), RegistryError> {
    if rule.family() != family {
        return Err(RegistryError::InvalidRuleDefinition(format!(
            "a {} rule cannot be added to a {} registry",
            rule.family().name(),
            family.name()
        )));
    }
    Ok(())
}

/// A registry built once and read-only afterwards. Lookups need no synchronization.
pub struct FrozenRegistry {
    name: String,
    family: RuleFamily,
    rules: RuleMap,
    metrics: RegistryMetrics,
}

impl FrozenRegistry {
    /// Fails if a rule belongs to another family or two rules share a key.
    pub fn new(
        name: &str,
        family: RuleFamily,
        rules: Vec<ValidatorRule>,
    ) -> Result<Self, RegistryError> {
        let mut map = RuleMap::with_capacity(rules.len());
        for rule in rules {
            check_family(family, &rule)?;
            let key = rule.key().to_owned();
            if map.insert(key.clone(), Arc::new(rule)).is_some() {
                return Err(RegistryError::InvalidRuleDefinition(format!(
                    "duplicate key '{key}'"
                )));
            }
        }
        Ok(Self {
            name: name.to_owned(),
            family,
            rules: map,
            metrics: RegistryMetrics::new(name),
        })
    }
}

impl Registry for FrozenRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    fn family(&self) -> RuleFamily {
        self.family
    }

    fn get(&self, code: &str) -> Option<Arc<ValidatorRule>> {
        lookup(&self.rules, code, &self.metrics)
    }

    fn rules(&self) -> Vec<Arc<ValidatorRule>> {
        sorted_rules(&self.rules)
    }

    fn install(&self, _rule: ValidatorRule) -> Result<Option<Arc<ValidatorRule>>, RegistryError> {
        Err(RegistryError::ImmutableRegistry)
    }

    fn remove(&self, _key: &str) -> Result<Option<Arc<ValidatorRule>>, RegistryError> {
        Err(RegistryError::ImmutableRegistry)
    }
}

/// A registry owned by its creator. Lookups read a snapshot of the rules without locking;
/// every change swaps in a new snapshot, retrying if another change landed first.
pub struct MutableRegistry {
    name: String,
    family: RuleFamily,
    rules: ArcSwap<RuleMap>,
    metrics: RegistryMetrics,
}

impl MutableRegistry {
    pub fn new(name: &str, family: RuleFamily) -> Self {
        Self {
            name: name.to_owned(),
            family,
            rules: ArcSwap::from_pointee(RuleMap::new()),
            metrics: RegistryMetrics::new(name),
        }
    }

    /// Starts from a copy of every rule in `registry`.
    pub fn copy_of(name: &str, registry: &dyn Registry) -> Self {
        let rules = registry
            .rules()
            .into_iter()
            .map(|rule| (rule.key().to_owned(), rule))
            .collect::<RuleMap>();
        Self {
            name: name.to_owned(),
            family: registry.family(),
            rules: ArcSwap::from_pointee(rules),
            metrics: RegistryMetrics::new(name),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Registry for MutableRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    fn family(&self) -> RuleFamily {
        self.family
    }

    fn get(&self, code: &str) -> Option<Arc<ValidatorRule>> {
        lookup(&self.rules.load(), code, &self.metrics)
    }

    fn rules(&self) -> Vec<Arc<ValidatorRule>> {
        sorted_rules(&self.rules.load())
    }

    fn install(&self, rule: ValidatorRule) -> Result<Option<Arc<ValidatorRule>>, RegistryError> {
        check_family(self.family, &rule)?;
        let key = rule.key().to_owned();
        let rule = Arc::new(rule);
        let previous = self.rules.rcu(|current| {
            let mut next = RuleMap::clone(current);
            next.insert(key.clone(), Arc::clone(&rule));
            next
        });
        self.metrics.install.increment(1);
        Ok(previous.get(&key).cloned())
    }

    fn remove(&self, key: &str) -> Result<Option<Arc<ValidatorRule>>, RegistryError> {
        let previous = self.rules.rcu(|current| {
            let mut next = RuleMap::clone(current);
            next.remove(key);
            next
        });
        self.metrics.remove.increment(1);
        Ok(previous.get(key).cloned())
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::CheckDigitAlgorithm;
    use crate::registry::*;
    use ::metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;
    use std::sync::Arc;
    use std::thread;

    fn custom_rule(key: &str) -> ValidatorRule {
        ValidatorRule::new(
            RuleFamily::Iban,
            key,
            12,
            &format!(r"{key}\d{{10}}"),
            Some(CheckDigitAlgorithm::Iban),
        )
        .unwrap()
    }

    #[test]
    fn default_iban_registry() {
        assert!(DEFAULT_IBAN_REGISTRY.has("DE89370400440532013000"));
        assert!(DEFAULT_IBAN_REGISTRY.has("DE"));
        assert!(!DEFAULT_IBAN_REGISTRY.has("de89370400440532013000"));
        assert!(!DEFAULT_IBAN_REGISTRY.has("D"));
        assert!(!DEFAULT_IBAN_REGISTRY.has("ZZ"));

        assert!(DEFAULT_IBAN_REGISTRY.is_valid("DE89370400440532013000"));
        assert!(!DEFAULT_IBAN_REGISTRY.is_valid("DE89370400440532013001"));
        // right checksum, wrong length for Germany
        assert!(!DEFAULT_IBAN_REGISTRY.is_valid("DE8937040044053201300"));

        let rule = DEFAULT_IBAN_REGISTRY.get("NL91ABNA0417164300").unwrap();
        assert_eq!(rule.key(), "NL");
        assert_eq!(rule.length(), 18);
        assert_eq!(DEFAULT_IBAN_REGISTRY.rules().len(), 80);
    }

    #[test]
    fn default_vatin_registry() {
        assert_eq!(DEFAULT_VATIN_REGISTRY.rules().len(), 29);
        assert!(DEFAULT_VATIN_REGISTRY.has("FI"));
        assert!(!DEFAULT_VATIN_REGISTRY.has("fi"));
        assert!(DEFAULT_VATIN_REGISTRY.is_valid("DE136695976"));
        // no check digit for foreign companies
        assert!(DEFAULT_VATIN_REGISTRY.is_valid("EU826010755"));
        assert!(!DEFAULT_VATIN_REGISTRY.is_valid("EU82601075"));
        assert!(!DEFAULT_VATIN_REGISTRY.is_valid("GR023456780"));
    }

    #[test]
    fn frozen_registry_cannot_be_modified() {
        assert_eq!(
            DEFAULT_IBAN_REGISTRY.install(custom_rule("XX")),
            Err(RegistryError::ImmutableRegistry)
        );
        assert_eq!(
            DEFAULT_IBAN_REGISTRY.remove("DE"),
            Err(RegistryError::ImmutableRegistry)
        );
        assert!(DEFAULT_IBAN_REGISTRY.has("DE"));
    }

    #[test]
    fn frozen_registry_rejects_inconsistent_rules() {
        assert!(matches!(
            FrozenRegistry::new("test", RuleFamily::Iban, vec![custom_rule("XX"), custom_rule("XX")]),
            Err(RegistryError::InvalidRuleDefinition(_))
        ));
        assert!(matches!(
            FrozenRegistry::new("test", RuleFamily::Vatin, vec![custom_rule("XX")]),
            Err(RegistryError::InvalidRuleDefinition(_))
        ));
    }

    #[test]
    fn mutable_registry_install_and_remove() {
        let registry = MutableRegistry::new("custom", RuleFamily::Iban);
        assert!(registry.is_empty());
        assert!(!registry.has("XX"));

        assert_eq!(registry.install(custom_rule("XX")), Ok(None));
        assert!(registry.has("XX0000000000"));
        let replaced = registry.install(custom_rule("XX")).unwrap();
        assert_eq!(replaced.unwrap().key(), "XX");
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.remove("XX").unwrap().unwrap().key(), "XX");
        assert_eq!(registry.remove("XX"), Ok(None));
        assert!(!registry.has("XX"));

        let vatin_rule =
            ValidatorRule::new(RuleFamily::Vatin, "XX", 12, r"XX\d{10}", None).unwrap();
        assert!(matches!(
            registry.install(vatin_rule),
            Err(RegistryError::InvalidRuleDefinition(_))
        ));
    }

    #[test]
    fn copies_do_not_affect_the_default() {
        let registry = MutableRegistry::copy_of("custom", &*DEFAULT_IBAN_REGISTRY);
        assert_eq!(registry.len(), 80);
        assert_eq!(registry.family(), RuleFamily::Iban);

        registry.remove("DE").unwrap();
        assert!(!registry.is_valid("DE89370400440532013000"));
        assert!(DEFAULT_IBAN_REGISTRY.is_valid("DE89370400440532013000"));

        // a bank-specific German layout
        let rule = ValidatorRule::new(
            RuleFamily::Iban,
            "DE",
            22,
            r"DE\d{2}37040044\d{10}",
            Some(CheckDigitAlgorithm::Iban),
        )
        .unwrap();
        registry.install(rule).unwrap();
        assert!(registry.is_valid("DE89370400440532013000"));
        assert!(!registry.is_valid("DE44500105175407324931"));
        assert!(DEFAULT_IBAN_REGISTRY.is_valid("DE44500105175407324931"));
    }

    #[test]
    fn concurrent_installs_are_all_kept() {
        let registry = Arc::new(MutableRegistry::new("concurrent", RuleFamily::Iban));
        let keys: Vec<String> = ('A'..='Z').map(|c| format!("Q{c}")).collect();

        let handles: Vec<_> = keys
            .iter()
            .cloned()
            .map(|key| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.install(custom_rule(&key)).unwrap();
                    assert!(registry.has(&key));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), keys.len());
        let installed: Vec<String> = registry
            .rules()
            .iter()
            .map(|rule| rule.key().to_owned())
            .collect();
        assert_eq!(installed, keys);
    }

    #[test]
    fn should_submit_registry_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let registry = MutableRegistry::new("metrics_test", RuleFamily::Iban);
            registry.install(custom_rule("XX")).unwrap();
            registry.get("XX0000000000");
            registry.get("YY0000000000");
            registry.get("X");
            registry.remove("XX").unwrap();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let registry = Label::new("registry", "metrics_test");
        let expectations = [
            ("registry.lookups", Label::new("outcome", "hit"), 1),
            ("registry.lookups", Label::new("outcome", "miss"), 2),
            ("registry.mutations", Label::new("operation", "install"), 1),
            ("registry.mutations", Label::new("operation", "remove"), 1),
        ];
        for (name, label, count) in expectations {
            let metric_value = snapshot
                .get(&CompositeKey::new(
                    Counter,
                    Key::from_parts(name, vec![registry.clone(), label]),
                ))
                .expect("metric not found");
            assert_eq!(metric_value, &(None, None, DebugValue::Counter(count)));
        }
    }
}
