use std::panic::{AssertUnwindSafe, catch_unwind};

use serde_json::json;

use crate::test_utils::{Event, RecordingHost, navigator, todo_navigator};
use crate::{Config, Error, Navigator, QueryOptions};

const ROWS: &str =
    "[data-test='todo_page'] [data-test='todo_app'] [data-test='main'] [data-test='rows']";

#[test]
fn dispatches_the_compiled_path() {
    let nav = navigator(r#"{ "a": { "b": null } }"#);
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);

    let b = session.root().walk("a.b").unwrap();
    let chain = session.call(b, "click", vec![]).unwrap();

    assert_eq!(chain.selector, "[data-test='a'] [data-test='b']");
    assert_eq!(chain.calls, vec!["click"]);
    assert_eq!(
        session.host().events,
        vec![
            Event::Query("[data-test='a'] [data-test='b']".into()),
            Event::Call("click".into()),
        ]
    );
}

#[test]
fn chains_continue_through_the_host() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);

    let count = session.root().walk("todo_page.todo_app.footer.count").unwrap();
    let chain = session
        .call(count, "should", vec![json!("contain"), json!("2 items left")])
        .unwrap();
    let chain = session.then(chain, "click", vec![]).unwrap();
    assert_eq!(chain.calls, vec!["should", "click"]);
}

#[test]
fn call_rejects_what_does_not_dispatch() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let root = session.root();
    let page = root.child("todo_page").unwrap();

    assert!(matches!(
        session.call(root, "click", vec![]),
        Err(Error::ShadowedOperation { name, .. }) if name == "click"
    ));
    assert!(matches!(
        session.call(page, "frobnicate", vec![]),
        Err(Error::UnknownOperation { prefix, .. }) if prefix == "todo_page"
    ));
    assert!(matches!(
        session.call(page, "within", vec![]),
        Err(Error::ScopingOperation { .. })
    ));
    assert!(session.host().queries().is_empty());
}

#[test]
fn host_failures_propagate() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new().fail_call("click");
    let mut session = nav.session(&mut host);
    let toggle = session.root().walk("todo_page.todo_app.main.toggle_all").unwrap();

    let err = session.call(toggle, "click", vec![]).unwrap_err();
    assert_eq!(err.to_string(), "host error: click failed");
}

#[test]
fn nested_scopes_strip_the_enclosing_prefix() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let rows = session.root().walk("todo_page.todo_app.main.rows").unwrap();

    let chain = session
        .within(rows, &QueryOptions::default(), |s, rows, subject| {
            assert_eq!(subject, ROWS);
            assert_eq!(s.scopes().depth(), 1);

            let row = rows.child("row").unwrap();
            s.call(row, "should", vec![json!("have.length"), json!(2)])?;
            s.call(rows, "should", vec![json!("be.visible")])?;

            s.within(row, &QueryOptions::default(), |s, row, _| {
                assert_eq!(s.scopes().depth(), 2);
                s.call(row.child("label").unwrap(), "click", vec![])?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();

    assert_eq!(chain.selector, ROWS);
    assert!(session.scopes().is_empty());
    assert_eq!(
        session.host().events,
        vec![
            Event::Query(ROWS.into()),
            Event::Enter(ROWS.into()),
            Event::Query("[data-test='row']".into()),
            Event::Call("should".into()),
            Event::ScopedSubject,
            Event::Call("should".into()),
            Event::Query("[data-test='row']".into()),
            Event::Enter("[data-test='row']".into()),
            Event::Query("[data-test='label']".into()),
            Event::Call("click".into()),
            Event::Exit,
            Event::Exit,
        ]
    );
}

#[test]
fn scoped_row_filter_strips_to_the_filtered_item() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let rows = session.root().walk("todo_page.todo_app.main.rows").unwrap();

    session
        .within(rows, &QueryOptions::default(), |s, rows, _| {
            let row = rows.row_filter().unwrap().by("label", "Walk the dog").unwrap();
            s.call(row.child("checkbox").unwrap(), "check", vec![])?;
            Ok(())
        })
        .unwrap();

    assert_eq!(
        session.host().queries(),
        vec![
            ROWS,
            "[data-test='row']:has([data-test='label']:contains('Walk the dog')) \
             [data-test='checkbox']",
        ]
    );
}

#[test]
fn failure_in_innermost_scope_leaves_the_stack_empty() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let rows = session.root().walk("todo_page.todo_app.main.rows").unwrap();
    let row = rows.child("row").unwrap();

    let err = session
        .within(rows, &QueryOptions::default(), |s, rows, _| {
            let row = rows.child("row").unwrap();
            s.within(row, &QueryOptions::default(), |_, _, _| {
                Err(Error::host("element not found"))
            })?;
            Ok(())
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "host error: element not found");
    assert!(session.scopes().is_empty());

    // Nothing stale is stripped afterwards.
    session.call(row, "click", vec![]).unwrap();
    let last = session.host().queries().last().map(|q| q.to_string());
    assert_eq!(last, Some(format!("{ROWS} [data-test='row']")));
}

#[test]
fn failing_host_scope_still_pops() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new().fail_within();
    let mut session = nav.session(&mut host);
    let rows = session.root().walk("todo_page.todo_app.main.rows").unwrap();

    let mut ran = false;
    let result = session.within(rows, &QueryOptions::default(), |_, _, _| {
        ran = true;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!ran);
    assert!(session.scopes().is_empty());
}

#[test]
fn panicking_body_still_pops() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let rows = session.root().walk("todo_page.todo_app.main.rows").unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        session.within(rows, &QueryOptions::default(), |_, _, _| panic!("boom"))
    }));
    assert!(outcome.is_err());
    assert!(session.scopes().is_empty());
}

#[test]
fn child_named_like_an_operation_is_navigation() {
    let nav = navigator(r#"{ "form": { "type": null, "name": null } }"#);
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let form = session.root().child("form").unwrap();

    assert!(matches!(
        session.call(form, "type", vec![json!("x")]),
        Err(Error::ShadowedOperation { .. })
    ));

    let kind = form.child("type").unwrap();
    session.call(kind, "type", vec![json!("text")]).unwrap();
    let name = form.child("name").unwrap();
    session.call(name, "type", vec![json!("Ada")]).unwrap();

    assert_eq!(
        session.host().queries(),
        vec![
            "[data-test='form'] [data-test='type']",
            "[data-test='form'] [data-test='name']",
        ]
    );
}

#[test]
fn child_named_like_the_scoping_operation_blocks_scoping() {
    let nav = navigator(r#"{ "panel": { "within": null } }"#);
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let panel = session.root().child("panel").unwrap();

    let result = session.within(panel, &QueryOptions::default(), |_, _, _| Ok(()));
    assert!(matches!(result, Err(Error::ShadowedOperation { .. })));
    assert!(session.scopes().is_empty());
    assert!(session.host().events.is_empty());
}

#[test]
fn host_api_is_captured_once_per_navigator() {
    let nav = todo_navigator();
    let mut first = RecordingHost::new();
    {
        let mut session = nav.session(&mut first);
        let count = session.root().walk("todo_page.todo_app.footer.count").unwrap();
        session.call(count, "should", vec![]).unwrap();
        session.call(count, "click", vec![]).unwrap();
        session.resolve(count, "first");
    }
    let mut second = RecordingHost::new();
    {
        let mut session = nav.session(&mut second);
        let count = session.root().walk("todo_page.todo_app.footer.count").unwrap();
        session.call(count, "click", vec![]).unwrap();
    }

    assert_eq!(first.captures, 1);
    assert_eq!(second.captures, 0);
    assert_eq!(nav.stats().host_captures, 1);
}

#[test]
fn tget_ignores_the_scope() {
    let nav = todo_navigator();
    let mut host = RecordingHost::new();
    let mut session = nav.session(&mut host);
    let rows = session.root().walk("todo_page.todo_app.main.rows").unwrap();

    session
        .within(rows, &QueryOptions::default(), |s, _, _| {
            s.tget("todo_page todo_app main rows row:first", &QueryOptions::quiet())?;
            Ok(())
        })
        .unwrap();

    assert_eq!(
        session.host().queries(),
        vec![
            ROWS,
            "[data-test='todo_page'] [data-test='todo_app'] [data-test='main'] \
             [data-test='rows'] [data-test='row']:first",
        ]
    );
}

#[test]
fn custom_scoping_operation() {
    let config = Config::default().scoping_operation("inside");
    let nav = Navigator::from_json(r#"{ "list": { "item": null } }"#, config).unwrap();
    let mut host = RecordingHost::with_operations(&["click", "inside"]);
    let mut session = nav.session(&mut host);
    let list = session.root().child("list").unwrap();

    assert!(matches!(
        session.call(list, "inside", vec![]),
        Err(Error::ScopingOperation { .. })
    ));
    session
        .within(list, &QueryOptions::default(), |s, list, _| {
            s.call(list.child("item").unwrap(), "click", vec![])?;
            Ok(())
        })
        .unwrap();
    assert_eq!(
        session.host().queries(),
        vec!["[data-test='list']", "[data-test='item']"]
    );
}
