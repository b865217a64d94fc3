//! Rule set documents in the TOML form accepted by `RuleSet::from_toml_str`.

/// Subject domains with ordering, companion and connectivity rules.
///
/// [`crate::sentences::subject_object`] satisfies every rule.
pub const SAMPLE_RULES: &str = r#"
[[starters]]
pattern = "S"
domain = "subject"

[[starters]]
pattern = "C"
domain = "clause"

[[rules]]
id = "links/minimum"
message = "Linkage is empty"
[rules.check]
type = "minimum_links"
count = 1

[[rules]]
id = "domain/subject-no-crossing"
message = "Subject domains may not cross"
[rules.check]
type = "containment"
domain = "subject"

[[rules]]
id = "domain/subject-bounded"
[rules.check]
type = "bounded"
domain = "subject"

[[rules]]
id = "order/subject-before-object"
message = "Subject must precede object"
[rules.check]
type = "ordering"
selector = "S"
anchor = "O"
order = "before"

[[rules]]
id = "companion/object-needs-subject"
message = "Object without subject"
[rules.check]
type = "companion"
selector = "O"
companions = ["S"]

[[rules]]
id = "graph/connected"
message = "Linkage is not connected"
[rules.check]
type = "connected"
"#;

/// One clause domain kind and a containment rule.
///
/// [`crate::sentences::crossing_clauses`] violates it at link 1;
/// [`crate::sentences::nested_clauses`] does not.
pub const CLAUSE_RULES: &str = r#"
[[starters]]
pattern = "C"
domain = "clause"

[[rules]]
id = "clause/no-crossing"
message = "Clauses may not cross"
[rules.check]
type = "containment"
domain = "clause"
"#;

/// `Ca` opens clauses and `Cb` opens asides; clauses may cross asides.
///
/// [`crate::sentences::crossing_clauses`] is well-formed under these rules.
pub const PERMISSIVE_CLAUSE_RULES: &str = r#"
[[starters]]
pattern = "Ca"
domain = "clause"

[[starters]]
pattern = "Cb"
domain = "aside"

[[rules]]
id = "clause/no-crossing"
[rules.check]
type = "containment"
domain = "clause"
allow = ["Cb"]
"#;
