#[cfg(test)]
mod tests {
    use anyhow::Result;
    use float_cmp::approx_eq;
    use panelcut::CutError;
    use panelcut::geometry::Dimension;
    use panelcut::packer::Packing;
    use panelcut_cli::config::CutConfig;
    use panelcut_cli::session::{CutSession, Reply, SessionState, SessionStore};

    fn dim(width: f32, height: f32) -> Dimension {
        Dimension::try_new(width, height).unwrap()
    }

    fn feed_all(session: &mut CutSession, lines: &[&str]) -> Vec<Reply> {
        let config = CutConfig::default();
        lines.iter().map(|l| session.feed(l, &config)).collect()
    }

    #[test]
    fn stock_parts_then_finish() {
        let mut session = CutSession::new();
        let replies = feed_all(&mut session, &["100x50", "30x20", "30x20", "30x20", "done"]);

        assert_eq!(replies[0], Reply::StockAccepted(dim(100.0, 50.0)));
        assert_eq!(
            replies[3],
            Reply::PartAdded {
                dim: dim(30.0, 20.0),
                count: 3
            }
        );
        let Reply::Finished(packing) = &replies[4] else {
            panic!("expected a finished packing, got {:?}", replies[4]);
        };
        assert_eq!(packing.sheets.len(), 1);
        assert_eq!(packing.placed_count(), 3);
        assert!(approx_eq!(f32, packing.report().waste_percent, 64.0, epsilon = 1e-3));
        assert_eq!(session.state(), &SessionState::AwaitingStock);
    }

    #[test]
    fn rejected_lines_leave_state_unchanged() {
        let mut session = CutSession::new();
        let replies = feed_all(&mut session, &["hello", "100x50", "0x10", "abc"]);

        assert!(matches!(replies[0], Reply::Rejected(CutError::MalformedInput { .. })));
        assert!(matches!(replies[2], Reply::Rejected(CutError::InvalidDimension { .. })));
        assert!(matches!(replies[3], Reply::Rejected(CutError::MalformedInput { .. })));
        assert_eq!(
            session.state(),
            &SessionState::CollectingParts {
                stock: dim(100.0, 50.0),
                parts: vec![]
            }
        );
    }

    #[test]
    fn finish_keyword_before_stock_is_rejected() {
        let mut session = CutSession::new();
        let replies = feed_all(&mut session, &["done"]);
        assert!(matches!(replies[0], Reply::Rejected(_)));
        assert_eq!(session.state(), &SessionState::AwaitingStock);
    }

    #[test]
    fn finish_without_parts_yields_empty_packing() {
        let mut session = CutSession::new();
        let replies = feed_all(&mut session, &["100x50", "تمام"]);
        assert_eq!(
            replies[1],
            Reply::Finished(Packing::empty(dim(100.0, 50.0)))
        );
    }

    #[test]
    fn oversize_parts_are_reported_on_finish() {
        let mut session = CutSession::new();
        let replies = feed_all(&mut session, &["100x50", "120x10", "40x40", "done"]);
        let Reply::Finished(packing) = &replies[3] else {
            panic!("expected a finished packing");
        };
        assert_eq!(packing.placed_count(), 1);
        assert_eq!(packing.oversize.len(), 1);
        assert_eq!(packing.oversize[0].part.id, 0);
    }

    #[test]
    fn store_delivers_and_removes_finished_session() -> Result<()> {
        let config = CutConfig::default();
        let mut store = SessionStore::new();
        let mut delivered: Vec<(String, Packing)> = vec![];
        let mut sink = |name: &str, packing: &Packing| -> Result<()> {
            delivered.push((name.to_owned(), packing.clone()));
            Ok(())
        };

        store.start(7_u64);
        for line in ["100x100", "60x60", "60x60"] {
            store.feed(&7, line, &config, &mut sink)?;
        }
        assert!(store.contains(&7));

        let reply = store.feed(&7, "done", &config, &mut sink)?;
        assert!(matches!(reply, Some(Reply::Finished(_))));
        assert!(!store.contains(&7));
        assert!(store.is_empty());

        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, "7");
        assert_eq!(delivered[0].1.sheets.len(), 2);
        Ok(())
    }

    #[test]
    fn unknown_session_is_ignored() -> Result<()> {
        let mut store: SessionStore<u64> = SessionStore::new();
        let mut sink = |_: &str, _: &Packing| -> Result<()> { panic!("nothing to deliver") };
        let reply = store.feed(&1, "100x100", &CutConfig::default(), &mut sink)?;
        assert_eq!(reply, None);
        Ok(())
    }

    #[test]
    fn sessions_are_independent() -> Result<()> {
        let config = CutConfig::default();
        let mut store = SessionStore::new();
        let mut sink = |_: &str, _: &Packing| -> Result<()> { Ok(()) };

        store.start("alice".to_owned());
        store.start("bob".to_owned());
        let alice = "alice".to_owned();
        let bob = "bob".to_owned();

        store.feed(&alice, "100x100", &config, &mut sink)?;
        store.feed(&bob, "50x50", &config, &mut sink)?;
        store.feed(&alice, "10x10", &config, &mut sink)?;
        store.feed(&bob, "done", &config, &mut sink)?;

        assert!(!store.contains(&bob));
        assert_eq!(
            store.get(&alice).map(|s| s.state().clone()),
            Some(SessionState::CollectingParts {
                stock: dim(100.0, 100.0),
                parts: vec![dim(10.0, 10.0)]
            })
        );

        assert!(store.cancel(&alice));
        assert!(!store.cancel(&alice));
        assert_eq!(store.len(), 0);
        Ok(())
    }

    #[test]
    fn failing_sink_keeps_the_session_for_a_retry() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
        let config = CutConfig::default();
        let mut store = SessionStore::new();
        let mut failing = |_: &str, _: &Packing| -> Result<()> { anyhow::bail!("disk full") };

        store.start(1_u32);
        for line in ["100x50", "30x20", "40x10"] {
            store.feed(&1, line, &config, &mut failing).unwrap();
        }
        let collected = store.get(&1).map(|s| s.state().clone());

        let result = store.feed(&1, "done", &config, &mut failing);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("disk full"));
        assert!(store.contains(&1));
        assert_eq!(store.get(&1).map(|s| s.state().clone()), collected);

        let mut delivered = 0;
        let mut working = |_: &str, packing: &Packing| -> Result<()> {
            delivered += packing.placed_count();
            Ok(())
        };
        let reply = store.feed(&1, "done", &config, &mut working).unwrap();
        assert!(matches!(reply, Some(Reply::Finished(_))));
        assert!(!store.contains(&1));
        assert_eq!(delivered, 2);
    }
}
