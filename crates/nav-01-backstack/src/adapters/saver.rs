//! Primitive-list saver for `NavStack`
//!
//! ## Layout
//!
//! ```text
//! section 0     [current_index]
//! section 1     [key, screen, route, context,  key, screen, route, context, ...]
//! section 2..n  [current_index, key, screen, route, context, ...]   one per snapshot
//! ```
//!
//! Every value is plain JSON (string, number, object), so the list can be
//! handed to any host persistence layer. Snapshot roots are not stored; they
//! are recomputed from each snapshot's last entry.

use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error};

use crate::domain::{NavStack, NavStackList, Record, RecordContext, RecordKey, RootKey, Screen};
use crate::error::BackStackError;
use crate::ports::StackSaver;

/// Values per flattened record: key, screen, route, context.
pub const RECORD_TUPLE_LEN: usize = 4;

const HEADER_SECTION: usize = 0;
const LIVE_SECTION: usize = 1;
const FIRST_SNAPSHOT_SECTION: usize = 2;

/// Default `StackSaver` producing a list of JSON primitive lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavStackSaver;

impl NavStackSaver {
    /// Encode the section list as JSON bytes.
    pub fn to_json_bytes<S: Screen>(&self, stack: &NavStack<S>) -> Result<Vec<u8>, BackStackError> {
        let sections = self.save(stack)?;
        serde_json::to_vec(&sections).map_err(|e| BackStackError::Serialization(e.to_string()))
    }

    /// Decode JSON bytes produced by `to_json_bytes`.
    pub fn from_json_bytes<S: Screen>(&self, bytes: &[u8]) -> Result<NavStack<S>, BackStackError> {
        let sections: Vec<Value> = serde_json::from_slice(bytes).map_err(|e| {
            error!(error = %e, "navigation state is not valid JSON");
            BackStackError::Serialization(e.to_string())
        })?;
        self.restore(sections)
    }
}

impl<S: Screen> StackSaver<S> for NavStackSaver {
    type Saved = Vec<Value>;

    fn save(&self, stack: &NavStack<S>) -> Result<Vec<Value>, BackStackError> {
        let mut sections = Vec::with_capacity(FIRST_SNAPSHOT_SECTION + stack.saved_state_count());
        sections.push(Value::Array(vec![Value::from(stack.current_index())]));

        let mut live = Vec::with_capacity(stack.len() * RECORD_TUPLE_LEN);
        for record in stack.iter() {
            encode_record(record, &mut live)?;
        }
        sections.push(Value::Array(live));

        let mut snapshots = Vec::with_capacity(stack.saved_state_count());
        for saved in stack.saved_states() {
            let mut section = Vec::with_capacity(1 + saved.len() * RECORD_TUPLE_LEN);
            section.push(Value::from(saved.current_index()));
            for record in saved.iter() {
                encode_record(record, &mut section)?;
            }
            let order = encode_screen(saved.root().screen())?.to_string();
            snapshots.push((order, Value::Array(section)));
        }
        // Stable output regardless of map iteration order
        snapshots.sort_by(|a, b| a.0.cmp(&b.0));
        sections.extend(snapshots.into_iter().map(|(_, section)| section));

        debug!(
            len = stack.len(),
            index = stack.current_index(),
            snapshots = stack.saved_state_count(),
            "saved navigation state"
        );
        Ok(sections)
    }

    fn restore(&self, saved: Vec<Value>) -> Result<NavStack<S>, BackStackError> {
        match decode(&saved) {
            Ok(stack) => {
                debug!(
                    len = stack.len(),
                    index = stack.current_index(),
                    snapshots = stack.saved_state_count(),
                    "restored navigation state"
                );
                Ok(stack)
            }
            Err(e) => {
                error!(error = %e, sections = saved.len(), "failed to restore navigation state");
                Err(e)
            }
        }
    }
}

/// Decode a section list into a stack, checking every invariant.
pub fn decode<S: Screen>(sections: &[Value]) -> Result<NavStack<S>, BackStackError> {
    let header = section(sections, HEADER_SECTION)?;
    if header.len() != 1 {
        return Err(BackStackError::CorruptState(format!(
            "header holds {} values, expected 1",
            header.len()
        )));
    }
    let current_index = decode_index(&header[0], HEADER_SECTION, 0)?;

    let entries: Vec<Record<S>> =
        decode_records(section(sections, LIVE_SECTION)?, LIVE_SECTION, 0)?;

    let mut state_store = HashMap::new();
    for index in FIRST_SNAPSHOT_SECTION..sections.len() {
        let values = section(sections, index)?;
        let Some(first) = values.first() else {
            return Err(BackStackError::CorruptState(format!(
                "snapshot section {} has no header",
                index
            )));
        };
        let snapshot_index = decode_index(first, index, 0)?;
        let records: Vec<Record<S>> = decode_records(&values[1..], index, 1)?;
        let snapshot = NavStackList::new(records, snapshot_index).ok_or_else(|| {
            BackStackError::CorruptState(format!(
                "snapshot section {} is empty or its cursor {} is out of range",
                index, snapshot_index
            ))
        })?;
        let root = RootKey::new(snapshot.root().screen().clone());
        if state_store.insert(root, snapshot).is_some() {
            return Err(BackStackError::CorruptState(format!(
                "snapshot section {} repeats an already saved root",
                index
            )));
        }
    }

    NavStack::from_parts(entries, current_index, state_store)
}

fn section(sections: &[Value], index: usize) -> Result<&[Value], BackStackError> {
    match sections.get(index) {
        Some(Value::Array(values)) => Ok(values),
        Some(_) => Err(BackStackError::UnexpectedType {
            section: index,
            position: 0,
            expected: "list section",
        }),
        None => Err(BackStackError::CorruptState(format!(
            "missing section {}",
            index
        ))),
    }
}

fn decode_index(value: &Value, section: usize, position: usize) -> Result<usize, BackStackError> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(BackStackError::UnexpectedType {
            section,
            position,
            expected: "unsigned index",
        })
}

/// `offset` is the position of `values[0]` within its section.
fn decode_records<S: Screen>(
    values: &[Value],
    section: usize,
    offset: usize,
) -> Result<Vec<Record<S>>, BackStackError> {
    if values.len() % RECORD_TUPLE_LEN != 0 {
        return Err(BackStackError::Arity {
            section,
            len: values.len(),
            tuple: RECORD_TUPLE_LEN,
        });
    }
    values
        .chunks_exact(RECORD_TUPLE_LEN)
        .enumerate()
        .map(|(i, tuple)| decode_record(tuple, section, offset + i * RECORD_TUPLE_LEN))
        .collect()
}

fn decode_record<S: Screen>(
    tuple: &[Value],
    section: usize,
    position: usize,
) -> Result<Record<S>, BackStackError> {
    let unexpected = |at: usize, expected: &'static str| BackStackError::UnexpectedType {
        section,
        position: position + at,
        expected,
    };

    let key = tuple[0].as_str().ok_or_else(|| unexpected(0, "string key"))?;
    let screen = S::deserialize(&tuple[1]).map_err(|_| unexpected(1, "screen"))?;
    let route = tuple[2].as_str().ok_or_else(|| unexpected(2, "string route"))?;
    let context = match &tuple[3] {
        Value::Object(map) => RecordContext::from(map.clone()),
        _ => return Err(unexpected(3, "context object")),
    };

    Ok(Record::from_parts(
        RecordKey::from(key),
        screen,
        route.to_string(),
        context,
    ))
}

fn encode_record<S: Screen>(record: &Record<S>, out: &mut Vec<Value>) -> Result<(), BackStackError> {
    out.push(Value::from(record.key().as_str()));
    out.push(encode_screen(record.screen())?);
    out.push(Value::from(record.route()));
    out.push(Value::Object(record.context().to_object()));
    Ok(())
}

fn encode_screen<S: Screen>(screen: &S) -> Result<Value, BackStackError> {
    serde_json::to_value(screen).map_err(|e| BackStackError::Serialization(e.to_string()))
}
