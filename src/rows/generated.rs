//! Interfaces generated for the demo schema.
//!
//! `AA <- BB <- CC` and `BB <- DD` form a branching tree: every row below
//! `AA` points at its parent through `PARENT_ID`.

use super::value::RowId;

crate::row_interface! {
    /// The `PUBLIC.V_2603` view.
    pub shape V2603("PUBLIC.V_2603"): IV2603, V2603Pojo {
        col1: i64 = "COL1",
        col4: i64 = "COL4",
    }
}

crate::row_interface! {
    pub shape Aa("AA"): IAa, AaPojo {
        id: i64 = "ID",
        text: String = "TEXT",
    }
}

crate::row_interface! {
    pub shape Bb("BB"): IBb, BbPojo {
        id: i64 = "ID",
        text: String = "TEXT",
        parent: RowId = "PARENT_ID" references "AA",
    }
}

crate::row_interface! {
    pub shape Cc("CC"): ICc, CcPojo {
        id: i64 = "ID",
        text: String = "TEXT",
        parent: RowId = "PARENT_ID" references "BB",
    }
}

crate::row_interface! {
    pub shape Dd("DD"): IDd, DdPojo {
        id: i64 = "ID",
        text: String = "TEXT",
        parent: RowId = "PARENT_ID" references "BB",
    }
}

pub const DEMO_DDL: &str = "
CREATE TABLE aa (
    id INTEGER PRIMARY KEY,
    text VARCHAR(255)
);
CREATE TABLE bb (
    id INTEGER PRIMARY KEY,
    text VARCHAR(255),
    parent_id INTEGER REFERENCES aa (id)
);
CREATE TABLE cc (
    id INTEGER PRIMARY KEY,
    text VARCHAR(255),
    parent_id INTEGER,
    FOREIGN KEY (parent_id) REFERENCES bb (id)
);
CREATE TABLE dd (
    id INTEGER PRIMARY KEY,
    text VARCHAR(255),
    parent_id INTEGER REFERENCES bb (id)
);
CREATE TABLE v_2603 (
    col1 INTEGER,
    col4 INTEGER
);
";
