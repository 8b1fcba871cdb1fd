use std::{ptr, rc::Rc};

use super::{
    ddl::parse_layouts,
    generated::{Aa, AaPojo, Bb, BbPojo, IAa, IBb, IV2603, V2603Field, V2603Pojo, DEMO_DDL, V2603},
    Column, DynRecord, Error, FieldType, Layout, Record, Row, RowCopy, RowId, RowShape, Value,
};

fn v2603(col1: i64, col4: i64) -> V2603Pojo {
    V2603Pojo {
        col1: Some(col1),
        col4: Some(col4),
    }
}

#[test]
fn from_copies_every_field() {
    let a = v2603(7, 42);
    let mut b = v2603(0, 0);
    b.copy_from(&a);
    assert_eq!(b.col1(), Some(7));
    assert_eq!(b.col4(), Some(42));
    assert_eq!(a, b);
}

#[test]
fn into_returns_the_target() {
    let a = v2603(7, 42);
    let mut c = V2603Pojo::default();
    let returned = a.copy_into(&mut c);
    assert_eq!(returned.col1, Some(7));
    let returned: *const V2603Pojo = returned;
    assert!(ptr::eq(returned, &c));
    assert_eq!(c, v2603(7, 42));
}

#[test]
fn copies_between_record_and_pojo() {
    let a = v2603(7, 42);
    let mut record = Record::<V2603>::new();
    record.copy_from(&a);
    assert_eq!(record.values(), &[Value::Int(7), Value::Int(42)]);

    let mut back = V2603Pojo::default();
    record.set_col4(None);
    record.copy_into(&mut back);
    assert_eq!(back.col1, Some(7));
    assert_eq!(back.col4, None);
}

#[test]
fn copy_is_idempotent() {
    let a = v2603(1, 2);
    let mut once = Record::<V2603>::new();
    once.copy_from(&a);
    let mut twice = Record::<V2603>::new();
    twice.copy_from(&a);
    twice.copy_from(&a);
    assert_eq!(once, twice);

    let mut c = V2603Pojo::default();
    a.copy_into(&mut c).copy_from(&a);
    assert_eq!(c, a);
}

#[test]
fn copy_is_by_value() {
    let mut a = BbPojo::default();
    a.set_text("two".to_owned());
    a.set_parent(RowId(1));

    let mut b = Record::<Bb>::new();
    b.copy_from(&a);
    a.set_text("changed".to_owned());
    a.set_parent(None);

    assert_eq!(b.text().as_deref(), Some("two"));
    assert_eq!(b.parent(), Some(RowId(1)));
}

#[test]
fn copy_over_trait_objects() {
    let a = v2603(3, 4);
    let source: &dyn Row<Shape = V2603> = &a;
    let mut target = Record::<V2603>::new();
    target.copy_from(source);
    assert_eq!(target.col1(), Some(3));
}

#[test]
fn field_enum_follows_declaration_order() {
    assert_eq!(V2603Field::Col1.index(), 0);
    assert_eq!(V2603Field::Col4.index(), 1);
    assert_eq!(V2603Field::from_index(2), None);
    assert_eq!(V2603Field::Col4.field().name, "COL4");
    assert_eq!(V2603::index_of("col4"), Some(1));
    assert_eq!(Bb::FIELDS[2].references, Some("AA"));
}

#[test]
fn out_of_range_indexes_are_inert() {
    let mut a = v2603(1, 2);
    a.set(5, Value::Int(9));
    assert_eq!(a.get(5), Value::Null);
    assert_eq!(a, v2603(1, 2));

    let mut r = Record::<V2603>::new();
    r.set(5, Value::Int(9));
    assert_eq!(r.get(5), Value::Null);
}

#[test]
fn record_checks_values() {
    let r = Record::<Aa>::from_values(vec![Value::Int(1), "one".into()]).unwrap();
    assert_eq!(r.id(), Some(1));
    assert_eq!(r.to_string(), "AA{ID: 1, TEXT: one}");

    assert!(matches!(
        Record::<Aa>::from_values(vec![Value::Int(1)]),
        Err(Error::Arity {
            expected: 2,
            found: 1,
            ..
        })
    ));
    assert!(matches!(
        Record::<Aa>::from_values(vec!["one".into(), "one".into()]),
        Err(Error::TypeMismatch {
            expected: FieldType::Integer,
            found: FieldType::Text,
            ..
        })
    ));
}

#[test]
fn record_sets_by_name() {
    let mut r = Record::<Bb>::new();
    r.try_set("parent_id", RowId(4)).unwrap();
    r.try_set("Text", "two").unwrap();
    assert_eq!(r.value("PARENT_ID").unwrap(), &Value::Ref(RowId(4)));
    assert_eq!(r.text(), Some("two".to_owned()));

    assert!(matches!(
        r.try_set("parent_id", 4),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        r.try_set("nope", 4),
        Err(Error::UnknownField { .. })
    ));
}

fn demo_layout(name: &str) -> Rc<Layout> {
    let layout = parse_layouts(DEMO_DDL)
        .unwrap()
        .into_iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
        .unwrap();
    Rc::new(layout)
}

#[test]
fn dynamic_copy_matches_by_name() {
    let v = demo_layout("v_2603");
    let reordered = Rc::new(Layout::new(
        "REORDERED",
        vec![
            Column::new("COL4", FieldType::Integer),
            Column::new("EXTRA", FieldType::Text),
            Column::new("COL1", FieldType::Integer),
        ],
    )
    .unwrap());

    let a = DynRecord::from_values(v, vec![Value::Int(7), Value::Int(42)]).unwrap();
    let mut b = DynRecord::new(reordered);
    b.set("extra", "kept").unwrap();
    let returned = a.copy_into(&mut b).unwrap();
    assert_eq!(returned.get("col1").unwrap(), &Value::Int(7));
    assert_eq!(b.values(), &[Value::Int(42), "kept".into(), Value::Int(7)]);
}

#[test]
fn failed_dynamic_copy_writes_nothing() {
    let v = demo_layout("v_2603");
    let clash = Rc::new(Layout::new(
        "CLASH",
        vec![
            Column::new("COL1", FieldType::Integer),
            Column::new("COL4", FieldType::Text),
        ],
    )
    .unwrap());

    let a = DynRecord::from_values(v, vec![Value::Int(7), Value::Int(42)]).unwrap();
    let mut b = DynRecord::from_values(clash, vec![Value::Int(1), "x".into()]).unwrap();
    assert!(matches!(b.copy_from(&a), Err(Error::TypeMismatch { .. })));
    assert_eq!(b.values(), &[Value::Int(1), "x".into()]);

    let narrow =
        Rc::new(Layout::new("NARROW", vec![Column::new("COL1", FieldType::Integer)]).unwrap());
    let mut n = DynRecord::new(narrow);
    assert!(matches!(a.copy_into(&mut n), Err(Error::MissingField { .. })));
    assert_eq!(n.values(), &[Value::Null]);
}

#[test]
fn dynamic_rows_bridge_to_static_rows() {
    let bb = demo_layout("bb");
    let mut pojo = BbPojo::default();
    pojo.set_id(2);
    pojo.set_text("two".to_owned());
    pojo.set_parent(RowId(1));

    let mut row = DynRecord::new(bb);
    row.copy_from_row(&pojo).unwrap();
    assert_eq!(row.to_string(), "bb{id: 2, text: two, parent_id: 1}");

    let mut record = Record::<Bb>::new();
    row.copy_into_row(&mut record).unwrap();
    assert_eq!(record.parent(), Some(RowId(1)));

    // AA has no PARENT_ID
    let mut aa = AaPojo::default();
    assert!(matches!(
        row.copy_into_row(&mut aa),
        Err(Error::MissingField { .. })
    ));
    assert_eq!(aa, AaPojo::default());
}

#[test]
fn demo_ddl_agrees_with_generated_shapes() {
    for (name, layout) in [
        ("aa", Layout::of::<Aa>().unwrap()),
        ("bb", Layout::of::<Bb>().unwrap()),
        ("v_2603", Layout::of::<V2603>().unwrap()),
    ] {
        let parsed = demo_layout(name);
        assert!(layout.is_assignable_to(&parsed), "{name}");
        assert!(parsed.is_assignable_to(&layout), "{name}");
    }
}

#[test]
fn wide_integers_survive_a_round_trip() {
    let wide = i64::from(i32::MAX) + 1;
    let record =
        Record::<V2603>::from_values(vec![Value::Int(3_000_000_000), Value::Int(wide)]).unwrap();

    let mut pojo = V2603Pojo::default();
    record.copy_into(&mut pojo);
    assert_eq!(pojo.col1, Some(3_000_000_000));
    assert_eq!(pojo.col4(), Some(wide));

    let mut back = Record::<V2603>::new();
    back.copy_from(&pojo);
    assert_eq!(back, record);

    let row = DynRecord::from_values(demo_layout("v_2603"), vec![Value::Int(i64::MIN), Value::Null])
        .unwrap();
    let mut pojo = V2603Pojo::default();
    row.copy_into_row(&mut pojo).unwrap();
    assert_eq!(pojo.col1, Some(i64::MIN));
    assert_eq!(pojo.col4, None);
}

#[test]
fn mistyped_set_stores_null_everywhere() {
    let mut record = Record::<V2603>::from_values(vec![Value::Int(1), Value::Int(2)]).unwrap();
    record.set(V2603Field::Col1.index(), "seven".into());
    assert_eq!(record.values(), &[Value::Null, Value::Int(2)]);

    let mut pojo = v2603(1, 2);
    pojo.set(V2603Field::Col1.index(), "seven".into());
    assert_eq!(pojo, V2603Pojo { col1: None, col4: Some(2) });

    let mut bb = Record::<Bb>::new();
    bb.set(2, Value::Int(1));
    assert_eq!(bb.parent(), None);
    assert_eq!(bb.get(2), Value::Null);
}

#[test]
fn bridge_copies_reject_mismatched_types() {
    let texty = Rc::new(
        Layout::new(
            "TEXTY",
            vec![
                Column::new("COL1", FieldType::Text),
                Column::new("COL4", FieldType::Integer),
            ],
        )
        .unwrap(),
    );

    let mut row = DynRecord::from_values(texty, vec!["x".into(), Value::Int(5)]).unwrap();
    match row.copy_from_row(&v2603(7, 42)) {
        Err(Error::TypeMismatch {
            field,
            expected,
            found,
        }) => {
            assert_eq!(field, "COL1");
            assert_eq!(expected, FieldType::Text);
            assert_eq!(found, FieldType::Integer);
        }
        r => panic!("expected a type mismatch, got {r:?}"),
    }
    assert_eq!(row.values(), &["x".into(), Value::Int(5)]);

    let mut pojo = v2603(1, 2);
    assert!(matches!(
        row.copy_into_row(&mut pojo),
        Err(Error::TypeMismatch { .. })
    ));
    assert_eq!(pojo, v2603(1, 2));
}
