//! # CLI Command Implementations
//!
//! Every command follows the same shape: load the record file, build an
//! immutable snapshot, run one structured query against the engine, render
//! the outcome as text or JSON. Names come from the record file; persons
//! without one render as bare `#id`.

use crate::store;
use chrono::NaiveDate;
use kinship_core::{
    Clock, FixedClock, GraphSnapshot, KinshipError, PersonId, QueryOutcome, QueryType,
    SnapshotMetrics, SystemClock, TreeNode, check_new_parent_child, run,
};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Load records and build the snapshot the engine queries.
fn load_snapshot(
    records: &Path,
) -> Result<(GraphSnapshot, BTreeMap<PersonId, String>), KinshipError> {
    let family = store::load(records)?;
    let snapshot = family.build_snapshot()?;
    let names = family.display_names();
    Ok((snapshot, names))
}

/// Render one person as `Name (#id)`, or bare `#id` when unnamed.
fn person_label(names: &BTreeMap<PersonId, String>, id: PersonId) -> String {
    match names.get(&id) {
        Some(name) => format!("{} (#{})", name, id.0),
        None => format!("#{}", id.0),
    }
}

/// JSON object for one person: id plus optional name.
fn person_json(names: &BTreeMap<PersonId, String>, id: PersonId) -> serde_json::Value {
    serde_json::json!({
        "id": id.0,
        "name": names.get(&id),
    })
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show snapshot metrics.
pub fn cmd_status(records: &Path, json_mode: bool) -> Result<(), KinshipError> {
    let (snapshot, _names) = load_snapshot(records)?;
    let metrics = SnapshotMetrics::from_snapshot(&snapshot);

    if json_mode {
        let output = serde_json::json!({
            "persons": metrics.person_count,
            "parent_child_edges": metrics.parent_child_edge_count,
            "partnerships": metrics.partnership_count,
            "founders": metrics.founder_count,
            "density_per_thousand": metrics.density_per_thousand(),
            "longest_ancestor_chain": metrics.longest_ancestor_chain,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Kinship Family Graph Status");
    println!("===========================");
    println!();
    println!("Persons:        {}", metrics.person_count);
    println!("Parent-Child:   {}", metrics.parent_child_edge_count);
    println!("Partnerships:   {}", metrics.partnership_count);
    println!("Founders:       {}", metrics.founder_count);
    println!(
        "Density:        {} per thousand",
        metrics.density_per_thousand()
    );
    println!(
        "Longest Chain:  {} generations",
        metrics.longest_ancestor_chain
    );

    Ok(())
}

// =============================================================================
// PERSON-SET COMMANDS
// =============================================================================

/// List all ancestors of a person.
pub fn cmd_ancestors(
    records: &Path,
    json_mode: bool,
    person: u64,
    depth: Option<usize>,
) -> Result<(), KinshipError> {
    person_set_command(
        records,
        json_mode,
        "ancestors",
        QueryType::ancestors(PersonId(person), depth),
    )
}

/// List all descendants of a person.
pub fn cmd_descendants(
    records: &Path,
    json_mode: bool,
    person: u64,
    depth: Option<usize>,
) -> Result<(), KinshipError> {
    person_set_command(
        records,
        json_mode,
        "descendants",
        QueryType::descendants(PersonId(person), depth),
    )
}

/// List the siblings of a person.
pub fn cmd_siblings(records: &Path, json_mode: bool, person: u64) -> Result<(), KinshipError> {
    person_set_command(
        records,
        json_mode,
        "siblings",
        QueryType::Siblings(PersonId(person)),
    )
}

/// List the grandparents of a person.
pub fn cmd_grandparents(records: &Path, json_mode: bool, person: u64) -> Result<(), KinshipError> {
    person_set_command(
        records,
        json_mode,
        "grandparents",
        QueryType::Grandparents(PersonId(person)),
    )
}

/// Run one person-set query and render the resulting ids.
fn person_set_command(
    records: &Path,
    json_mode: bool,
    label: &str,
    query: QueryType,
) -> Result<(), KinshipError> {
    let (snapshot, names) = load_snapshot(records)?;

    let QueryOutcome::Persons(set) = run(&snapshot, &SystemClock, query) else {
        unreachable!("set queries produce person sets");
    };

    render_person_set(label, &set, &names, json_mode);
    Ok(())
}

/// Render a deterministic person set as a list or a JSON array.
fn render_person_set(
    label: &str,
    set: &BTreeSet<PersonId>,
    names: &BTreeMap<PersonId, String>,
    json_mode: bool,
) {
    if json_mode {
        let persons: Vec<serde_json::Value> =
            set.iter().map(|&id| person_json(names, id)).collect();
        let output = serde_json::json!({
            "query": label,
            "count": set.len(),
            "persons": persons,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return;
    }

    if set.is_empty() {
        println!("No {} found.", label);
        return;
    }

    println!("Found {} {}:", set.len(), label);
    for &id in set {
        println!("  {}", person_label(names, id));
    }
}

// =============================================================================
// PATH COMMAND
// =============================================================================

/// Find the shortest labeled relationship path between two persons.
pub fn cmd_path(records: &Path, json_mode: bool, from: u64, to: u64) -> Result<(), KinshipError> {
    let (snapshot, names) = load_snapshot(records)?;
    let from = PersonId(from);
    let to = PersonId(to);

    let QueryOutcome::Path(path) = run(&snapshot, &SystemClock, QueryType::path(from, to)) else {
        unreachable!("path queries produce paths");
    };

    if json_mode {
        let output = match &path {
            Some(path) => serde_json::json!({
                "query": "path",
                "from": from.0,
                "to": to.0,
                "degree": path.degree(),
                "steps": path.steps,
            }),
            None => serde_json::json!({
                "query": "path",
                "from": from.0,
                "to": to.0,
                "degree": serde_json::Value::Null,
                "steps": [],
            }),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    match path {
        Some(path) if path.degree() == 0 => {
            println!("{} is the same person.", person_label(&names, from));
        }
        Some(path) => {
            println!(
                "Path from {} to {} (degree {}):",
                person_label(&names, from),
                person_label(&names, to),
                path.degree()
            );
            for step in &path.steps {
                println!(
                    "  {} -[{}]-> {}",
                    person_label(&names, step.from),
                    step.relation,
                    person_label(&names, step.to)
                );
            }
        }
        None => {
            println!(
                "No path between {} and {}.",
                person_label(&names, from),
                person_label(&names, to)
            );
        }
    }

    Ok(())
}

// =============================================================================
// TREE COMMAND
// =============================================================================

/// Render a mini family tree around a focus person.
pub fn cmd_tree(
    records: &Path,
    json_mode: bool,
    focus: u64,
    up: usize,
    down: usize,
) -> Result<(), KinshipError> {
    let (snapshot, names) = load_snapshot(records)?;
    let focus = PersonId(focus);

    let QueryOutcome::Tree(tree) = run(&snapshot, &SystemClock, QueryType::tree(focus, up, down))
    else {
        unreachable!("tree queries produce trees");
    };

    if json_mode {
        let output = serde_json::json!({
            "query": "tree",
            "focus": focus.0,
            "tree": tree,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    match tree {
        Some(tree) => print_tree_node(&tree, &names, 0, ""),
        None => println!("Person #{} is not in the records.", focus.0),
    }

    Ok(())
}

/// Indented tree rendering: parents and children nest under each node.
fn print_tree_node(node: &TreeNode, names: &BTreeMap<PersonId, String>, indent: usize, role: &str) {
    let pad = "  ".repeat(indent);
    let mut line = format!("{}{}", pad, role);
    line.push_str(&person_label(names, node.person));
    line.push_str(&format!(" [gen {:+}]", node.generation));

    if !node.spouses.is_empty() {
        let spouses: Vec<String> = node
            .spouses
            .iter()
            .map(|&spouse| person_label(names, spouse))
            .collect();
        line.push_str(&format!("  spouses: {}", spouses.join(", ")));
    }

    println!("{}", line);

    for parent in &node.parents {
        print_tree_node(parent, names, indent + 1, "parent: ");
    }
    for child in &node.children {
        print_tree_node(child, names, indent + 1, "child: ");
    }
}

// =============================================================================
// AGE COMMAND
// =============================================================================

/// Compute a person's completed calendar years.
///
/// `--on` pins the reference date; otherwise the system clock decides.
pub fn cmd_age(
    records: &Path,
    json_mode: bool,
    person: u64,
    on: Option<NaiveDate>,
) -> Result<(), KinshipError> {
    let (snapshot, names) = load_snapshot(records)?;
    let person = PersonId(person);

    let clock: Box<dyn Clock> = match on {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let QueryOutcome::Age(age) = run(&snapshot, clock.as_ref(), QueryType::Age(person)) else {
        unreachable!("age queries produce ages");
    };

    if json_mode {
        let output = serde_json::json!({
            "query": "age",
            "person": person.0,
            "age": age,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    match age {
        Some(age) => println!(
            "Age of {}: {} completed years",
            person_label(&names, person),
            age
        ),
        None => println!("Age of {}: unknown", person_label(&names, person)),
    }

    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate a proposed parent-child edge against the current snapshot.
///
/// The verdict is the command's output; a rejection is not a CLI failure.
pub fn cmd_check(
    records: &Path,
    json_mode: bool,
    parent: u64,
    child: u64,
) -> Result<(), KinshipError> {
    let (snapshot, names) = load_snapshot(records)?;
    let parent = PersonId(parent);
    let child = PersonId(child);

    let verdict = check_new_parent_child(&snapshot, parent, child);

    if json_mode {
        let output = serde_json::json!({
            "query": "check",
            "parent": parent.0,
            "child": child.0,
            "accepted": verdict.is_ok(),
            "reason": verdict.as_ref().err().map(ToString::to_string),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    match verdict {
        Ok(()) => println!(
            "Edge {} -> {} would be accepted.",
            person_label(&names, parent),
            person_label(&names, child)
        ),
        Err(rejection) => println!(
            "Edge {} -> {} rejected: {}",
            person_label(&names, parent),
            person_label(&names, child),
            rejection
        ),
    }

    Ok(())
}
