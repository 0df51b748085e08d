//! Randomized operation sequences checked against the index audit and a
//! simple model of the expected contents.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rolo_types::{Contact, ContactId, ContactPatch, NewContact};

use crate::{ContactStore, InMemoryContactStore};

// Small pools so that tokens, phones and emails collide often.
const NAMES: &[&str] = &[
    "Alice Smith",
    "Bob Smithson",
    "alice  jones",
    "Carol",
    "Dana Lee Smith",
    "BOB BOB",
];
const PHONES: &[&str] = &["1234567890", "(555) 123-4567", "5551234567", "1234567890"];
const EMAILS: &[&str] = &[
    "alice@example.com",
    "ALICE@example.com",
    "bob@smith.org",
    "dana@x.com",
];

#[derive(Clone, Debug)]
enum Op {
    Create { name: usize, phone: usize, email: usize },
    Update {
        slot: usize,
        name: Option<usize>,
        phone: Option<usize>,
        email: Option<usize>,
    },
    Delete { slot: usize },
    DeleteUnknown,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..NAMES.len(), 0..PHONES.len(), 0..EMAILS.len())
            .prop_map(|(name, phone, email)| Op::Create { name, phone, email }),
        3 => (
            any::<usize>(),
            proptest::option::of(0..NAMES.len()),
            proptest::option::of(0..PHONES.len()),
            proptest::option::of(0..EMAILS.len()),
        )
            .prop_map(|(slot, name, phone, email)| Op::Update { slot, name, phone, email }),
        2 => any::<usize>().prop_map(|slot| Op::Delete { slot }),
        1 => Just(Op::DeleteUnknown),
    ]
}

fn model_matches(model: &BTreeMap<ContactId, Contact>, query: &str) -> Vec<ContactId> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    model
        .values()
        .filter(|c| {
            c.name
                .split_whitespace()
                .any(|t| t.to_lowercase().contains(&needle))
                || c.phone.contains(&needle)
                || c.email.to_lowercase().contains(&needle)
        })
        .map(|c| c.id)
        .collect()
}

proptest! {
    #[test]
    fn indexes_stay_consistent(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let store = InMemoryContactStore::new();
        let mut model: BTreeMap<ContactId, Contact> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Create { name, phone, email } => {
                    let c = store.create(NewContact::new(NAMES[name], PHONES[phone], EMAILS[email]));
                    model.insert(c.id, c);
                }
                Op::Update { slot, name, phone, email } => {
                    if model.is_empty() {
                        continue;
                    }
                    let id = *model.keys().nth(slot % model.len()).unwrap();
                    let patch = ContactPatch {
                        name: name.map(|i| NAMES[i].to_string()),
                        phone: phone.map(|i| PHONES[i].to_string()),
                        email: email.map(|i| EMAILS[i].to_string()),
                    };
                    let updated = store.update(&id, &patch).unwrap();
                    let expected = model.get_mut(&id).unwrap();
                    patch.apply_to(expected);
                    prop_assert_eq!(&updated, &*expected);
                }
                Op::Delete { slot } => {
                    if model.is_empty() {
                        continue;
                    }
                    let id = *model.keys().nth(slot % model.len()).unwrap();
                    prop_assert!(store.delete(&id));
                    model.remove(&id);
                    prop_assert!(!store.delete(&id));
                }
                Op::DeleteUnknown => {
                    prop_assert!(!store.delete(&ContactId::generate()));
                }
            }

            let audit = store.audit();
            prop_assert!(audit.is_consistent(), "violations: {:?}", audit.violations);
            prop_assert_eq!(audit.contacts, model.len());
        }

        let listed: Vec<ContactId> = store.list().into_iter().map(|c| c.id).collect();
        let expected: Vec<ContactId> = model.keys().copied().collect();
        prop_assert_eq!(listed, expected);

        for query in ["smith", "ALICE", "123", "@", "example.com", "bob", "  ", "zzz"] {
            let found: Vec<ContactId> = store.search(query).into_iter().map(|c| c.id).collect();
            prop_assert_eq!(found, model_matches(&model, query));
        }
    }
}
