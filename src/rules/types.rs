// A named clearance constraint bound by a `rule` form in the project's
// `drc-rules` file. `condition` is the author's free-text predicate, kept
// for round-tripping and diagnostics; matching itself is driven by the
// structured `Selector` fields bound to this rule by name.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub clearance: f64,
    pub condition: Option<String>,
}

// A predicate over a pair of objects, bound to a named rule. Every `match_*`
// field is a wildcard when `None`.
#[derive(Debug, Clone)]
pub struct Selector {
    pub match_layer: Option<String>,
    pub match_netclass: Option<String>,
    pub match_ref: Option<String>,
    pub match_item: Option<String>,
    pub rule_name: String,
    // Position in the source file; ties between equal-priority selectors
    // are broken in favor of the earlier one.
    pub file_order: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RuleFile {
    pub rules: Vec<Rule>,
    pub selectors: Vec<Selector>,
}

impl RuleFile {
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

// The attributes of a tested pair a selector can match against. Built by
// the resolver from whichever side of the pair carries each attribute.
#[derive(Debug, Clone, Default)]
pub struct MatchCtx<'a> {
    pub layers: Vec<String>,
    pub netclasses: Vec<&'a str>,
    pub refs: Vec<&'a str>,
    pub items: Vec<&'a str>,
}

impl Selector {
    pub fn matches(&self, ctx: &MatchCtx) -> bool {
        field_matches(&self.match_layer, &ctx.layers)
            && field_matches_str(&self.match_netclass, &ctx.netclasses)
            && field_matches_str(&self.match_ref, &ctx.refs)
            && field_matches_str(&self.match_item, &ctx.items)
    }
}

fn field_matches(field: &Option<String>, candidates: &[String]) -> bool {
    match field {
        None => true,
        Some(v) => candidates.iter().any(|c| c == v),
    }
}

fn field_matches_str(field: &Option<String>, candidates: &[&str]) -> bool {
    match field {
        None => true,
        Some(v) => candidates.iter().any(|c| c == v),
    }
}
