use std::fmt::{Display, Formatter};
use serde_json::{json, Map, Value};
use dvroute::concepts::table::RouteTable;
use dvroute::store::RouteStore;
use crate::GraphSystem;

const BANNER: &str = "=====================================================";
const SEPARATOR: &str = "==========================";

fn round_header(f: &mut Formatter<'_>, round: usize) -> std::fmt::Result {
    writeln!(f, "{BANNER}")?;
    writeln!(f, "            ROUND {round}")?;
    writeln!(f, "{BANNER}")
}

fn write_table(f: &mut Formatter<'_>, table: &RouteTable<GraphSystem>) -> std::fmt::Result {
    writeln!(f, "* {} *", table.address)?;
    for (dest, route) in table {
        writeln!(f, "{dest} : {route}")?;
    }
    Ok(())
}

/// Text dump of every node's table, each followed by a separator line
pub struct AllTables<'a> {
    pub round: usize,
    pub store: &'a RouteStore<GraphSystem>,
}

impl Display for AllTables<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        round_header(f, self.round)?;
        for (_, table) in self.store.iter() {
            write_table(f, table)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

/// Text dump of a single node's table
pub struct NodeTable<'a> {
    pub round: usize,
    pub table: &'a RouteTable<GraphSystem>,
}

impl Display for NodeTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        round_header(f, self.round)?;
        write_table(f, self.table)
    }
}

fn table_json(table: &RouteTable<GraphSystem>) -> Value {
    let mut routes = Map::new();
    for (dest, route) in table {
        routes.insert(
            dest.to_string(),
            json!({ "cost": route.metric, "next_hop": route.next_hop }),
        );
    }
    Value::Object(routes)
}

pub fn json_all(round: usize, store: &RouteStore<GraphSystem>) -> Value {
    let mut tables = Map::new();
    for (node, table) in store.iter() {
        tables.insert(node.to_string(), table_json(table));
    }
    json!({ "round": round, "tables": tables })
}

pub fn json_node(round: usize, table: &RouteTable<GraphSystem>) -> Value {
    let mut tables = Map::new();
    tables.insert(table.address.to_string(), table_json(table));
    json!({ "round": round, "tables": tables })
}
