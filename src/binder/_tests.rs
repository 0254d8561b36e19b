#[cfg(test)]
pub mod fixtures {
    use crate::catalog::{Catalog, ColumnInfo, SqlType, TableSchema};

    pub fn create_people(catalog: &mut Catalog) {
        let schema = TableSchema::new()
            .with_column("id", ColumnInfo::not_null(SqlType::Integer))
            .with_column("full_name", ColumnInfo::new(SqlType::Varchar))
            .with_column("age", ColumnInfo::new(SqlType::Integer))
            .with_column("city", ColumnInfo::new(SqlType::Varchar));
        catalog.create_table("People", schema);
    }

    pub fn create_orders(catalog: &mut Catalog) {
        let schema = TableSchema::new()
            .with_column("rowid", ColumnInfo::hidden(SqlType::Integer))
            .with_column("id", ColumnInfo::not_null(SqlType::Integer))
            .with_column("person_id", ColumnInfo::not_null(SqlType::Integer))
            .with_column("quantity", ColumnInfo::new(SqlType::Integer))
            .with_column("status", ColumnInfo::new(SqlType::Varchar));
        catalog.create_table("Orders", schema);
    }

    pub fn create_scenario_table(catalog: &mut Catalog) {
        let schema = TableSchema::new()
            .with_column("id", ColumnInfo::not_null(SqlType::Integer))
            .with_column("name", ColumnInfo::new(SqlType::Varchar));
        catalog.create_table("t", schema);
    }

    pub fn create_range_function(catalog: &mut Catalog) {
        let schema = TableSchema::new()
            .with_column("range", ColumnInfo::not_null(SqlType::Integer));
        catalog.create_table_function("range", schema);
    }

    pub fn seed_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        create_people(&mut catalog);
        create_orders(&mut catalog);
        create_scenario_table(&mut catalog);
        create_range_function(&mut catalog);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::fixtures::*;
    use crate::{
        binder::{
            BindArena, BindContext, BinderError, Binder, BindingIndex, BindingKind, BoundQueryNode, ColumnBinding,
            ColumnRef,
        },
        catalog::{Catalog, CatalogProvider, ColumnInfo, SqlType, TableSchema},
        config::BinderConfig,
    };

    fn col(text: &str) -> ColumnRef {
        ColumnRef::parse(text).expect("valid column reference")
    }

    fn expanded_names(binder: &Binder, alias: Option<&str>) -> Vec<String> {
        binder.expand_star(alias).unwrap().iter().map(|c| c.name.to_string()).collect()
    }

    #[test]
    fn table_and_subquery_scenario() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());

        let t = binder.bind_base_table("t", None).unwrap();
        let s = binder.bind_subquery("s", BoundQueryNode::new([("id", SqlType::Integer), ("total", SqlType::Double)])).unwrap();

        let id = binder.bind_column(&col("t.id")).unwrap();
        assert_eq!(id.binding, ColumnBinding::new(t, 0));
        assert_eq!(id.ty, SqlType::Integer);
        assert_eq!(id.depth, 0);

        let total = binder.bind_column(&col("total")).unwrap();
        assert_eq!(total.binding, ColumnBinding::new(s, 1));
        assert_eq!(total.depth, 0);

        let err = binder.bind_column(&col("id")).unwrap_err();
        assert_eq!(err, BinderError::AmbiguousColumn { name: "id".into(), aliases: vec!["t".into(), "s".into()] });

        assert_eq!(expanded_names(&binder, None), vec!["t.id", "t.name", "s.id", "s.total"]);
    }

    #[test]
    fn qualified_reference_picks_one_binding() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        binder.bind_base_table("People", Some("p")).unwrap();
        let o = binder.bind_base_table("Orders", Some("o")).unwrap();

        let bound = binder.bind_column(&col("o.id")).unwrap();
        assert_eq!(bound.binding, ColumnBinding::new(o, 1));
        assert!(matches!(binder.bind_column(&col("id")), Err(BinderError::AmbiguousColumn { .. })));
    }

    #[test]
    fn alias_defaults_to_table_name() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        binder.bind_base_table("People", None).unwrap();

        assert_eq!(binder.context().aliases(), vec!["People"]);
        let err = binder.bind_base_table("People", None).unwrap_err();
        assert_eq!(err, BinderError::DuplicateAlias("People".into()));
    }

    #[test]
    fn unknown_catalog_objects() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        assert_eq!(binder.bind_base_table("Nope", None).unwrap_err(), BinderError::UnknownTable("Nope".into()));
        assert_eq!(
            binder.bind_table_function("nope", None).unwrap_err(),
            BinderError::UnknownTableFunction("nope".into())
        );
    }

    #[test]
    fn table_function_binding() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        let r = binder.bind_table_function("range", Some("r")).unwrap();

        let bound = binder.bind_column(&col("range")).unwrap();
        assert_eq!(bound.binding, ColumnBinding::new(r, 0));
        assert!(!bound.nullable);
        assert_eq!(binder.context().get_binding("r").unwrap().kind(), BindingKind::TableFunction);
    }

    #[test]
    fn values_list_binding() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        let rows = vec![vec![json!(1), json!("a")], vec![json!(2.5), json!(null)]];
        let v = binder.bind_values("v", vec!["n".into(), "label".into()], &rows).unwrap();

        let n = binder.bind_column(&col("v.n")).unwrap();
        assert_eq!(n.binding, ColumnBinding::new(v, 0));
        assert_eq!(n.ty, SqlType::Double);

        let label = binder.bind_column(&col("label")).unwrap();
        assert_eq!(label.ty, SqlType::Varchar);
        assert!(label.nullable);
        assert_eq!(binder.context().get_binding("v").unwrap().kind(), BindingKind::Generic);
    }

    #[test]
    fn hidden_columns_bind_but_do_not_expand() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        binder.bind_base_table("Orders", Some("o")).unwrap();

        assert_eq!(expanded_names(&binder, Some("o")), vec!["o.id", "o.person_id", "o.quantity", "o.status"]);
        let rowid = binder.bind_column(&col("rowid")).unwrap();
        assert_eq!(rowid.binding.column_index, 0);
    }

    #[test]
    fn derived_table_from_expanded_select() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());

        // FROM (SELECT * FROM People) AS sub
        binder.enter_subquery();
        binder.bind_base_table("People", None).unwrap();
        let columns = binder.expand_star(None).unwrap();
        let scope = binder.leave_subquery().unwrap();
        assert!(!scope.is_correlated());

        let sub = binder.bind_subquery("sub", BoundQueryNode::from_columns(&columns)).unwrap();
        let age = binder.bind_column(&col("sub.age")).unwrap();
        assert_eq!(age.binding, ColumnBinding::new(sub, 2));
        assert_eq!(age.ty, SqlType::Integer);
        // the People binding of the subquery is gone from the outer block
        assert_eq!(binder.bind_column(&col("People.age")).unwrap_err(), BinderError::UnknownAlias("People".into()));
    }

    #[test]
    fn correlated_subquery_marks_outer_reference() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());

        // SELECT * FROM People p WHERE EXISTS (SELECT 1 FROM Orders o WHERE o.person_id = p.id AND age > 30)
        let p = binder.bind_base_table("People", Some("p")).unwrap();
        binder.enter_subquery();
        let o = binder.bind_base_table("Orders", Some("o")).unwrap();

        let local = binder.bind_column(&col("o.person_id")).unwrap();
        assert_eq!(local.depth, 0);
        assert_eq!(local.binding.table_index, o);

        let outer = binder.bind_column(&col("p.id")).unwrap();
        assert_eq!(outer.depth, 1);
        assert_eq!(outer.binding, ColumnBinding::new(p, 0));

        let unqualified_outer = binder.bind_column(&col("age")).unwrap();
        assert_eq!(unqualified_outer.depth, 1);

        // `id` exists locally, so the inner binding wins without ambiguity
        let inner_id = binder.bind_column(&col("id")).unwrap();
        assert_eq!(inner_id.depth, 0);
        assert_eq!(inner_id.binding.table_index, o);

        let scope = binder.leave_subquery().unwrap();
        assert!(scope.is_correlated());
        assert_eq!(scope.correlated.len(), 2);
        assert!(binder.leave_subquery().is_none());
    }

    #[test]
    fn repeated_outer_reference_is_one_correlation() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());

        // ... WHERE o.person_id = p.id OR o.quantity > p.id
        let p = binder.bind_base_table("People", Some("p")).unwrap();
        binder.enter_subquery();
        binder.bind_base_table("Orders", Some("o")).unwrap();
        binder.bind_column(&col("p.id")).unwrap();
        binder.bind_column(&col("p.id")).unwrap();

        let scope = binder.leave_subquery().unwrap();
        assert_eq!(scope.correlated.len(), 1);
        assert_eq!(scope.correlated[0].binding, ColumnBinding::new(p, 0));
    }

    #[test]
    fn ragged_subquery_output_is_rejected() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        let node = BoundQueryNode {
            names: vec!["a".into(), "b".into()],
            types: vec![SqlType::Integer],
            nullable: vec![true],
        };

        let err = binder.bind_subquery("s", node).unwrap_err();
        assert_eq!(err, BinderError::ColumnCountMismatch { alias: "s".into(), names: 2, types: 1 });
        assert!(binder.context().is_empty());
        assert_eq!(
            binder.bind_column(&col("b")).unwrap_err(),
            BinderError::UnknownColumn { name: "b".into(), candidates: vec![] }
        );
    }

    #[test]
    fn case_folded_duplicate_columns_are_ambiguous() {
        let mut catalog = Catalog::new();
        let schema = TableSchema::new()
            .with_column("Id", ColumnInfo::new(SqlType::Integer))
            .with_column("ID", ColumnInfo::new(SqlType::Varchar))
            .with_column("note", ColumnInfo::new(SqlType::Varchar));
        catalog.create_table("t", schema.clone());
        catalog.create_table_function("f", schema);

        let mut binder = Binder::new(&catalog, BinderConfig::case_insensitive());
        binder.bind_base_table("t", None).unwrap();
        binder.bind_table_function("f", None).unwrap();

        assert_eq!(
            binder.bind_column(&col("t.id")).unwrap_err(),
            BinderError::AmbiguousColumn { name: "id".into(), aliases: vec!["t".into()] }
        );
        assert_eq!(
            binder.bind_column(&col("f.id")).unwrap_err(),
            BinderError::AmbiguousColumn { name: "id".into(), aliases: vec!["f".into()] }
        );
        assert_eq!(binder.bind_column(&col("t.NOTE")).unwrap().binding.column_index, 2);

        // exact spelling still tells the two apart when case matters
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        binder.bind_base_table("t", None).unwrap();
        assert_eq!(binder.bind_column(&col("t.ID")).unwrap().ty, SqlType::Varchar);
    }

    #[test]
    fn unknown_everywhere_reports_innermost() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        binder.bind_base_table("t", None).unwrap();
        binder.enter_subquery();
        binder.bind_generic("g", vec![SqlType::Integer], vec!["k".into()]).unwrap();

        let err = binder.bind_column(&col("missing")).unwrap_err();
        assert_eq!(err, BinderError::UnknownColumn { name: "missing".into(), candidates: vec!["g.k".into()] });

        let err = binder.bind_column(&col("x.k")).unwrap_err();
        assert_eq!(err, BinderError::UnknownAlias("x".into()));
    }

    #[test]
    fn case_insensitive_binder() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::case_insensitive());
        let p = binder.bind_base_table("People", Some("P")).unwrap();

        let bound = binder.bind_column(&col("p.FULL_NAME")).unwrap();
        assert_eq!(bound.binding, ColumnBinding::new(p, 1));
        assert_eq!(bound.name, "full_name");
    }

    #[test]
    fn binding_indexes_are_unique_per_statement() {
        let catalog = seed_catalog();
        let mut binder = Binder::new(&catalog, BinderConfig::default());
        let a = binder.bind_base_table("People", None).unwrap();
        binder.enter_subquery();
        let b = binder.bind_base_table("Orders", None).unwrap();
        binder.leave_subquery();
        let c = binder.bind_base_table("t", None).unwrap();

        assert_eq!((a, b, c), (BindingIndex(0), BindingIndex(1), BindingIndex(2)));
    }

    proptest! {
        #[test]
        fn star_expansion_follows_insertion_order(
            construction in Just(vec![0usize, 1, 2]).prop_shuffle(),
            insertion in Just(vec![0usize, 1, 2]).prop_shuffle(),
        ) {
            let catalog = seed_catalog();
            let sources = ["People", "Orders", "t"];

            // arena entries are created in one order, bindings added in another
            let mut arena = BindArena::new();
            let mut ids = [None; 3];
            for &i in &construction {
                ids[i] = catalog.table(sources[i]).map(|table| arena.add_table(table));
            }
            let mut ctx = BindContext::new(&BinderConfig::default());
            for &i in &insertion {
                ctx.add_table(sources[i], ids[i].unwrap()).unwrap();
            }

            let columns = ctx.generate_all_column_expressions(&arena);
            let mut expected = Vec::new();
            for &i in &insertion {
                expected.extend(ctx.generate_column_expressions(&arena, sources[i]).unwrap());
            }
            prop_assert_eq!(&columns, &expected);

            // each run is the table's selectable columns in declared order
            let names: Vec<String> = columns.iter().map(|c| c.name.to_string()).collect();
            let declared: Vec<String> = insertion.iter()
                .flat_map(|&i| {
                    let table = catalog.table(sources[i]).unwrap();
                    table.schema.visible_names().into_iter().map(move |n| format!("{}.{}", sources[i], n))
                })
                .collect();
            prop_assert_eq!(names, declared);

            // no interleaving: aliases appear as contiguous runs in insertion order
            let mut runs: Vec<String> = Vec::new();
            for column in &columns {
                let alias = column.name.table().unwrap_or_default().to_string();
                if runs.last() != Some(&alias) {
                    runs.push(alias);
                }
            }
            let inserted: Vec<String> = insertion.iter().map(|&i| sources[i].to_string()).collect();
            prop_assert_eq!(runs, inserted);
        }
    }
}
