use crate::board::{DesignSettings, Layer, NetCode};
use crate::rules::types::{MatchCtx, RuleFile};

// The attributes of one side of a tested pair that the resolver and its
// selectors can key off.
#[derive(Debug, Clone, Default)]
pub struct ResolveSide<'a> {
    pub layer: Option<Layer>,
    pub net: NetCode,
    pub footprint_ref: Option<&'a str>,
    pub item_kind: &'a str,
    // Priority 1.5: a pad- or footprint-local clearance override, checked
    // before the netclass but after an explicit user rule.
    pub local_clearance_override: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Resolved {
    pub clearance: f64,
    pub source: String,
}

// Resolves the minimum clearance for a pair of objects, consulting in
// priority order: an explicit user rule, a local clearance override, the
// netclass of the pair's net, the board default, and (for board-edge pairs)
// the edge clearance.
pub fn resolve(
    rules: &RuleFile,
    settings: &DesignSettings,
    a: &ResolveSide,
    b: &ResolveSide,
    is_edge_pair: bool,
) -> Resolved {
    let ctx = build_ctx(a, b);
    if let Some(r) = best_user_rule(rules, &ctx) {
        return Resolved { clearance: r.clearance, source: format!("user rule '{}'", r.name) };
    }

    if let Some(over) = a.local_clearance_override.or(b.local_clearance_override) {
        return Resolved { clearance: over, source: "local clearance override".to_string() };
    }

    if is_edge_pair {
        return Resolved {
            clearance: settings.copper_edge_clearance,
            source: "board edge clearance".to_string(),
        };
    }

    let net = pick_net(a.net, b.net);
    if let Some(nc) = settings.netclass_of(net) {
        return Resolved { clearance: nc.clearance, source: format!("netclass '{}'", nc.name) };
    }

    Resolved { clearance: settings.copper_clearance, source: "board default".to_string() }
}

fn build_ctx<'a>(a: &ResolveSide<'a>, b: &ResolveSide<'a>) -> MatchCtx<'a> {
    let mut ctx = MatchCtx::default();
    for side in [a, b] {
        if let Some(l) = side.layer {
            ctx.layers.push(l.to_string());
        }
        if let Some(r) = side.footprint_ref {
            ctx.refs.push(r);
        }
        ctx.items.push(side.item_kind);
    }
    ctx
}

// Highest-priority matching user rule; ties between equally-specific
// selectors are broken by earlier file position.
fn best_user_rule<'a>(rules: &'a RuleFile, ctx: &MatchCtx) -> Option<&'a crate::rules::types::Rule> {
    rules
        .selectors
        .iter()
        .filter(|s| s.matches(ctx))
        .min_by_key(|s| s.file_order)
        .and_then(|s| rules.rule(&s.rule_name))
}

// If the pair shares a positive net, that net's class applies; otherwise
// the more restrictive (larger) of the two applies, matching the resolver's
// "maximum of the two" rule for mixed-net pairs.
fn pick_net(a: NetCode, b: NetCode) -> NetCode {
    if a > 0 && a == b {
        a
    } else {
        a.max(b)
    }
}
