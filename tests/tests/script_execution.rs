//! Multi-instruction scripts, configuration and storage-name isolation.

use std::io::Write;

use tagraph_algebra::membership;
use tagraph_tests::prelude::*;

fn edge_membership(session: &Session, name: &str) -> Option<String> {
    let key = session.config().membership_key.clone();
    session
        .store()
        .edges()
        .find(|e| e.get_annotation("name") == Some(name))
        .and_then(|e| e.get_annotation(&key).map(str::to_string))
}

mod scripts {
    use super::*;

    #[test]
    fn test_partial_completion_is_reported() {
        // GIVEN $C allocated AND a script whose third instruction has a bad pattern
        init_tracing();
        let mut session = fixtures::provenance().unwrap();
        let c = session.create_graph("$C").unwrap();
        let d = session.create_graph("$D").unwrap();
        let a = session.graph("$A").unwrap();
        let b = session.graph("$B").unwrap();
        let base = session.base_graph().clone();
        let bad = Comparison::new("name", PredicateOperator::Regex, "[unclosed");
        let script = vec![
            Instruction::UnionGraph { target: c.clone(), source: a },
            Instruction::UnionGraph { target: c.clone(), source: b },
            Instruction::GetVertex {
                target: d.clone(),
                subject: base,
                predicate: Some(bad),
            },
            Instruction::CreateEmptyGraph { target: c.clone() },
        ];

        // WHEN run
        let err = session.run_script(&script).unwrap_err();

        // THEN two completed AND $C keeps their effect AND the fourth never ran
        match &err {
            SessionError::ScriptAborted { completed, source } => {
                assert_eq!(*completed, 2);
                assert!(matches!(
                    **source,
                    SessionError::Execution(ExecutionError::InvalidPattern { .. })
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("script aborted after 2 instruction(s)"));
        assert_eq!(session.stat("$C").unwrap(), GraphStats { vertices: 3, edges: 2 });
        assert_eq!(session.stat("$D").unwrap(), GraphStats::default());
    }

    #[test]
    fn test_completed_script_outputs() {
        let mut session = fixtures::provenance().unwrap();
        let c = session.create_graph("$C").unwrap();
        let a = session.graph("$A").unwrap();

        let result = session
            .run_script(&[
                Instruction::UnionGraph { target: c.clone(), source: a },
                Instruction::StatGraph { target: c.clone() },
                Instruction::ExportGraph { target: c },
                Instruction::ListGraphs { style: ListStyle::Detail },
            ])
            .unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(result.outputs[0], InstructionOutput::Unit);
        assert_eq!(result.stats().collect::<Vec<_>>(), vec![GraphStats { vertices: 2, edges: 1 }]);
        assert_eq!(result.snapshots().next().map(|g| g.edges.len()), Some(1));
        let listing = result.listings().next().unwrap();
        assert_eq!(listing.symbols(), vec!["base", "$A", "$B", "$C"]);
    }

    #[test]
    fn test_empty_script() {
        let mut session = fixtures::provenance().unwrap();
        let result = session.run_script(&[]).unwrap();
        assert!(result.is_empty());
        assert!(result.last().is_none());
    }
}

mod isolation {
    use super::*;

    #[test]
    fn test_graph_1_and_graph_10_stay_apart() {
        // GIVEN $A = graph_1 AND eight more graphs so that graph_10 exists
        let mut session = fixtures::provenance().unwrap();
        for i in 3..=9 {
            session.create_graph(format!("$g{i}")).unwrap();
        }
        session
            .get_edge("$g10", "base", Some(&Expr::compare("name", "=", "e2")))
            .unwrap();
        assert_eq!(session.graph("$g10").unwrap().as_str(), "graph_10");

        // WHEN e2's membership is read
        let m = edge_membership(&session, "e2").unwrap();

        // THEN it lists graph_2 and graph_10 only
        assert_eq!(m, ",graph_2,graph_10,");
        assert!(!membership::contains(Some(&m), "graph_1"));
        assert_eq!(session.stat("$A").unwrap(), GraphStats { vertices: 2, edges: 1 });
        assert_eq!(session.stat("$g10").unwrap(), GraphStats { vertices: 0, edges: 1 });
    }

    #[test]
    fn test_recreating_clears_edges_and_labels() {
        let mut session = fixtures::provenance().unwrap();
        let a = session.graph("$A").unwrap();

        session.execute(&Instruction::CreateEmptyGraph { target: a }).unwrap();

        assert_eq!(session.stat("$A").unwrap(), GraphStats::default());
        assert_eq!(edge_membership(&session, "e1"), None);
        assert_eq!(edge_membership(&session, "e2").as_deref(), Some(",graph_2,"));
    }

    #[test]
    fn test_sessions_with_distinct_prefixes() {
        // GIVEN two sessions over separate stores with different prefixes
        let mut left = fixtures::provenance().unwrap();
        let mut right =
            fixtures::provenance_with(SessionConfig::new().with_graph_name_prefix("r_")).unwrap();

        // WHEN each allocates a graph
        let l = left.create_graph("$X").unwrap();
        let r = right.create_graph("$X").unwrap();

        // THEN names follow each prefix
        assert_eq!(l.as_str(), "graph_3");
        assert_eq!(r.as_str(), "r_3");
        assert_eq!(right.graph("$A").unwrap().as_str(), "r_1");
        assert_eq!(edge_membership(&right, "e1").as_deref(), Some(",r_1,"));
    }

    #[test]
    fn test_allocation_skips_base_name() {
        let config = SessionConfig::new()
            .with_base_graph_name("g_2")
            .with_graph_name_prefix("g_");
        let mut session = Session::new(config).unwrap();

        let first = session.create_graph("$a").unwrap();
        let second = session.create_graph("$b").unwrap();

        assert_eq!(first.as_str(), "g_1");
        assert_eq!(second.as_str(), "g_3");
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_load_from_file() {
        // GIVEN a config file naming the base graph and membership key
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_graph_name = \"prov\"\nmembership_key = \"in_graphs\"\ngraph_name_prefix = \"tmp_\""
        )
        .unwrap();

        // WHEN a session is built from it
        let config = SessionConfig::load(file.path()).unwrap();
        let mut session = fixtures::provenance_with(config).unwrap();
        session.union("$C", "prov").unwrap();

        // THEN names and the membership key follow the file
        assert_eq!(session.base_graph().as_str(), "prov");
        assert_eq!(session.graph("$C").unwrap().as_str(), "tmp_3");
        assert_eq!(session.stat("$C").unwrap(), GraphStats { vertices: 3, edges: 2 });
        assert_eq!(edge_membership(&session, "e2").as_deref(), Some(",tmp_2,tmp_3,"));
        assert_eq!(
            session.list(ListStyle::Name).unwrap(),
            vec!["prov", "$A", "$B", "$C"]
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "graph_name_prefix = \"p_\"").unwrap();

        let config = SessionConfig::load(file.path()).unwrap();

        assert_eq!(config.base_graph_name, "base");
        assert_eq!(config.membership_key, "graph_membership");
        assert_eq!(config.graph_name_prefix, "p_");
    }

    #[test]
    fn test_invalid_files_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_graph_name = \"two words\"").unwrap();
        assert!(matches!(
            SessionConfig::load(file.path()),
            Err(ConfigError::Invalid { field: "base_graph_name", .. })
        ));
        assert!(matches!(
            Session::new(SessionConfig::new().with_membership_key(" ")),
            Err(SessionError::Config(ConfigError::Invalid { field: "membership_key", .. }))
        ));

        assert!(matches!(
            SessionConfig::load("/nonexistent/tagraph.toml"),
            Err(ConfigError::Io { .. })
        ));
        assert!(matches!(
            SessionConfig::from_toml_str("base_graph_name = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
