#![cfg(any(test, feature = "testutils"))]
extern crate std;

use soroban_sdk::testutils::Events;
use soroban_sdk::{vec, Address, Env, IntoVal, Val, Vec};

/// Asserts that event `index` was published by `contract_id` with the given topics and data.
///
/// A negative `index` counts from the most recent event, so `-1` is the last one.
pub fn assert_emitted_event<U, V>(env: &Env, index: i32, contract_id: &Address, topics: U, data: V)
where
    U: IntoVal<Env, Vec<Val>>,
    V: IntoVal<Env, Val>,
{
    let events = env.events().all();
    let position = if index < 0 {
        events.len().checked_sub(index.unsigned_abs())
    } else {
        Some(index as u32)
    };

    let Some((emitter, emitted_topics, emitted_data)) = position.and_then(|i| events.get(i))
    else {
        panic!(
            "no event at index {}, {} events were emitted",
            index,
            events.len()
        );
    };

    assert_eq!(&emitter, contract_id);
    assert_eq!(emitted_topics, topics.into_val(env));
    // Val has no structural equality, compare through a host vector instead.
    assert_eq!(vec![env, emitted_data], vec![env, data.into_val(env)]);
}

pub fn assert_last_emitted_event<U, V>(env: &Env, contract_id: &Address, topics: U, data: V)
where
    U: IntoVal<Env, Vec<Val>>,
    V: IntoVal<Env, Val>,
{
    assert_emitted_event(env, -1, contract_id, topics, data);
}
