//! Domain models for the direct lending graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::LendError;

/// Node label (type tag) in the lending graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Borrower,
    Lender,
    Deal,
    Sector,
}

impl Label {
    /// All known labels, in stats-reporting order.
    pub const ALL: [Label; 4] = [Label::Borrower, Label::Lender, Label::Deal, Label::Sector];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Borrower => "Borrower",
            Label::Lender => "Lender",
            Label::Deal => "Deal",
            Label::Sector => "Sector",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = LendError;

    /// Exact-match parsing; casing is significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Borrower" => Ok(Label::Borrower),
            "Lender" => Ok(Label::Lender),
            "Deal" => Ok(Label::Deal),
            "Sector" => Ok(Label::Sector),
            other => Err(LendError::UnknownLabel(other.to_string())),
        }
    }
}

/// A middle-market company raising debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Borrower {
    pub name: String,
    pub revenue_mm: i64,
    pub ebitda_mm: i64,
    pub hq: String,
}

/// A direct lending institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lender {
    pub name: String,
    /// Stored as the `type` property in the graph (BDC, Credit Fund).
    #[serde(rename = "type")]
    pub kind: String,
    pub aum_bn: f64,
}

/// A credit facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub name: String,
    /// Stored as the `type` property in the graph (Term Loan, Revolver, ...).
    #[serde(rename = "type")]
    pub deal_type: String,
    pub amount_mm: i64,
    pub spread_bps: i64,
    pub maturity: String,
}

/// An industry sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
}

/// A node with its label-specific closed schema.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum NodeRecord {
    Borrower(Borrower),
    Lender(Lender),
    Deal(Deal),
    Sector(Sector),
}

impl NodeRecord {
    pub fn label(&self) -> Label {
        match self {
            NodeRecord::Borrower(_) => Label::Borrower,
            NodeRecord::Lender(_) => Label::Lender,
            NodeRecord::Deal(_) => Label::Deal,
            NodeRecord::Sector(_) => Label::Sector,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeRecord::Borrower(b) => &b.name,
            NodeRecord::Lender(l) => &l.name,
            NodeRecord::Deal(d) => &d.name,
            NodeRecord::Sector(s) => &s.name,
        }
    }

    /// Stable visualization id: `"Label:Name"`. Unique because names are
    /// unique within a label.
    pub fn viz_id(&self) -> String {
        format!("{}:{}", self.label(), self.name())
    }

    /// Non-name properties as display pairs, in schema order.
    pub fn property_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            NodeRecord::Borrower(b) => vec![
                ("revenue_mm", b.revenue_mm.to_string()),
                ("ebitda_mm", b.ebitda_mm.to_string()),
                ("hq", b.hq.clone()),
            ],
            NodeRecord::Lender(l) => vec![
                ("type", l.kind.clone()),
                ("aum_bn", l.aum_bn.to_string()),
            ],
            NodeRecord::Deal(d) => vec![
                ("type", d.deal_type.clone()),
                ("amount_mm", d.amount_mm.to_string()),
                ("spread_bps", d.spread_bps.to_string()),
                ("maturity", d.maturity.clone()),
            ],
            NodeRecord::Sector(_) => vec![],
        }
    }

    /// Full property map (including `name`) for the detail endpoint.
    pub fn properties(&self) -> Value {
        match self {
            NodeRecord::Borrower(b) => json!({
                "name": b.name,
                "revenue_mm": b.revenue_mm,
                "ebitda_mm": b.ebitda_mm,
                "hq": b.hq,
            }),
            NodeRecord::Lender(l) => json!({
                "name": l.name,
                "type": l.kind,
                "aum_bn": l.aum_bn,
            }),
            NodeRecord::Deal(d) => json!({
                "name": d.name,
                "type": d.deal_type,
                "amount_mm": d.amount_mm,
                "spread_bps": d.spread_bps,
                "maturity": d.maturity,
            }),
            NodeRecord::Sector(s) => json!({
                "name": s.name,
            }),
        }
    }
}

/// Relationship type in the lending graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelKind {
    Borrowed,
    LentTo,
    InSector,
}

impl RelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelKind::Borrowed => "BORROWED",
            RelKind::LentTo => "LENT_TO",
            RelKind::InSector => "IN_SECTOR",
        }
    }

    /// Edge label for display (underscores become spaces).
    pub fn display(&self) -> &'static str {
        match self {
            RelKind::Borrowed => "BORROWED",
            RelKind::LentTo => "LENT TO",
            RelKind::InSector => "IN SECTOR",
        }
    }
}

impl FromStr for RelKind {
    type Err = LendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BORROWED" => Ok(RelKind::Borrowed),
            "LENT_TO" => Ok(RelKind::LentTo),
            "IN_SECTOR" => Ok(RelKind::InSector),
            other => Err(LendError::malformed(format!(
                "unexpected relationship type '{other}'"
            ))),
        }
    }
}

/// Reference to a node by label and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    pub label: Label,
    pub name: String,
}

impl NodeRef {
    pub fn new(label: Label, name: impl Into<String>) -> Self {
        Self {
            label,
            name: name.into(),
        }
    }

    pub fn viz_id(&self) -> String {
        format!("{}:{}", self.label, self.name)
    }
}

/// A directed relationship with its (optional) properties.
///
/// Only `LENT_TO` carries properties; `commitment_mm` and `role` stay `None`
/// for the other kinds.
#[derive(Debug, Clone, Serialize)]
pub struct RelRecord {
    pub kind: RelKind,
    pub from: NodeRef,
    pub to: NodeRef,
    pub commitment_mm: Option<i64>,
    pub role: Option<String>,
}

impl RelRecord {
    /// Relationship properties as display pairs.
    pub fn property_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(mm) = self.commitment_mm {
            pairs.push(("commitment_mm", mm.to_string()));
        }
        if let Some(role) = &self.role {
            pairs.push(("role", role.clone()));
        }
        pairs
    }

    /// Relationship properties as a JSON map for the detail endpoint.
    pub fn properties(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(mm) = self.commitment_mm {
            map.insert("commitment_mm".to_string(), json!(mm));
        }
        if let Some(role) = &self.role {
            map.insert("role".to_string(), json!(role));
        }
        Value::Object(map)
    }
}

/// Summary of a single node in the detail response.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSummary {
    pub label: Label,
    pub name: String,
    pub properties: Value,
}

/// One immediate neighbor of a node, with the connecting relationship.
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub relationship: String,
    pub relationship_props: Value,
    pub node_label: String,
    pub node_name: String,
    pub node_props: Value,
}

/// Detail response: a node plus its one-hop neighborhood.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDetail {
    pub node: NodeSummary,
    pub connections: Vec<Connection>,
}

/// Summary counts and totals for the whole graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub borrowers: i64,
    pub lenders: i64,
    pub deals: i64,
    pub sectors: i64,
    pub total_deal_volume_mm: i64,
    pub total_commitment_mm: i64,
    pub avg_deal_size_mm: f64,
}

impl GraphStats {
    /// Total node count across all labels.
    pub fn node_count(&self) -> i64 {
        self.borrowers + self.lenders + self.deals + self.sectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parses_exact_names_only() {
        assert_eq!("Borrower".parse::<Label>().unwrap(), Label::Borrower);
        assert_eq!("Sector".parse::<Label>().unwrap(), Label::Sector);
        assert!(matches!(
            "borrower".parse::<Label>(),
            Err(LendError::UnknownLabel(_))
        ));
        assert!(matches!(
            "Fund".parse::<Label>(),
            Err(LendError::UnknownLabel(_))
        ));
    }

    #[test]
    fn rel_kind_round_trips_wire_names() {
        for kind in [RelKind::Borrowed, RelKind::LentTo, RelKind::InSector] {
            assert_eq!(kind.as_str().parse::<RelKind>().unwrap(), kind);
        }
        assert!("FUNDED".parse::<RelKind>().is_err());
    }

    #[test]
    fn viz_id_is_label_colon_name() {
        let node = NodeRecord::Borrower(Borrower {
            name: "MedTech Solutions".to_string(),
            revenue_mm: 120,
            ebitda_mm: 28,
            hq: "Boston, MA".to_string(),
        });
        assert_eq!(node.viz_id(), "Borrower:MedTech Solutions");
    }

    #[test]
    fn property_pairs_exclude_name() {
        let node = NodeRecord::Lender(Lender {
            name: "Ares Capital".to_string(),
            kind: "BDC".to_string(),
            aum_bn: 21.0,
        });
        let pairs = node.property_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "name"));
        assert_eq!(pairs[0], ("type", "BDC".to_string()));
    }

    #[test]
    fn detail_properties_include_name() {
        let node = NodeRecord::Sector(Sector {
            name: "Healthcare".to_string(),
        });
        assert_eq!(node.properties()["name"], "Healthcare");
    }

    #[test]
    fn lent_to_properties_surface_commitment_and_role() {
        let rel = RelRecord {
            kind: RelKind::LentTo,
            from: NodeRef::new(Label::Lender, "Ares Capital"),
            to: NodeRef::new(Label::Deal, "Apex Revolver"),
            commitment_mm: Some(25),
            role: Some("Sole Lender".to_string()),
        };
        let props = rel.properties();
        assert_eq!(props["commitment_mm"], 25);
        assert_eq!(props["role"], "Sole Lender");

        let bare = RelRecord {
            kind: RelKind::InSector,
            from: NodeRef::new(Label::Borrower, "Apex Logistics"),
            to: NodeRef::new(Label::Sector, "Industrials"),
            commitment_mm: None,
            role: None,
        };
        assert_eq!(bare.properties(), serde_json::json!({}));
    }
}
