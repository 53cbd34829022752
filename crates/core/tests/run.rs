// crates/core/tests/run.rs
use std::cell::RefCell;
use std::io;
use std::net::UdpSocket;
use std::time::Duration;

use probe_core::compose::extract_correlation_id;
use probe_core::net::{Datagram, SendState};
use probe_core::templates::{Catalog, SourceTemplate};
use probe_core::{ProbeConfig, Selection, run};

#[derive(Default)]
struct Recorder {
    sent: RefCell<Vec<(String, u16, Vec<u8>)>>,
    refuse_port: Option<u16>,
}

impl Datagram for Recorder {
    fn send_to(&self, host: &str, port: u16, payload: &[u8]) -> io::Result<usize> {
        if self.refuse_port == Some(port) {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "port unreachable",
            ));
        }
        self.sent
            .borrow_mut()
            .push((host.to_string(), port, payload.to_vec()));
        Ok(payload.len())
    }
}

fn synthetic() -> Catalog {
    Catalog::from_templates([
        SourceTemplate::new("rtr", "<134>1 2025-08-01T13:47:39.000Z r1 ospf 1 X - body one").port(5141),
        SourceTemplate::new("fw", "<134>Aug  1 13:47:39 fw1 PA: body two").port(5142),
        SourceTemplate::new("short", "<13>too short").port(5143),
    ])
    .unwrap()
}

#[test]
fn send_all_reaches_every_entry() {
    let cat = synthetic();
    let t = Recorder::default();
    let summary = run(&cat, &Selection::All, &ProbeConfig::default(), &t, |_| {});
    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.succeeded, 3);
    let sent = t.sent.borrow();
    let ports: Vec<u16> = sent.iter().map(|(_, p, _)| *p).collect();
    assert_eq!(ports, [5141, 5142, 5143]);
    assert!(sent.iter().all(|(h, _, _)| h == "127.0.0.1"));
}

#[test]
fn one_failure_does_not_stop_the_batch() {
    let cat = synthetic();
    let t = Recorder {
        refuse_port: Some(5142),
        ..Recorder::default()
    };
    let mut states = Vec::new();
    let summary = run(&cat, &Selection::All, &ProbeConfig::default(), &t, |a| {
        states.push((a.outcome.source_type.clone(), a.outcome.state()));
    });
    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.succeeded, 2);
    assert!(summary.succeeded < summary.attempted);
    assert_eq!(
        states,
        [
            ("rtr".to_string(), SendState::Sent),
            ("fw".to_string(), SendState::Failed),
            ("short".to_string(), SendState::Sent),
        ]
    );
}

#[test]
fn unknown_source_type_is_a_failed_attempt() {
    let cat = synthetic();
    let t = Recorder::default();
    let mut errors = Vec::new();
    let summary = run(
        &cat,
        &Selection::One("juniper".into()),
        &ProbeConfig::default(),
        &t,
        |a| {
            assert!(a.template.is_none());
            errors.push(a.outcome.error.clone());
        },
    );
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.succeeded, 0);
    assert_eq!(errors, [Some("Unknown source type: juniper".to_string())]);
    assert!(t.sent.borrow().is_empty());
}

#[test]
fn without_injection_payload_is_raw_template() {
    let cat = synthetic();
    let t = Recorder::default();
    run(&cat, &Selection::One("fw".into()), &ProbeConfig::default(), &t, |a| {
        assert!(a.correlation_id.is_none());
    });
    let sent = t.sent.borrow();
    assert_eq!(sent[0].2, b"<134>Aug  1 13:47:39 fw1 PA: body two");
}

#[test]
fn injection_tags_each_message_with_its_own_id() {
    let cat = synthetic();
    let t = Recorder::default();
    let cfg = ProbeConfig::builder().inject_uuid(true).build();
    let mut ids = Vec::new();
    run(&cat, &Selection::All, &cfg, &t, |a| {
        let id = a.correlation_id.unwrap().to_string();
        let message = a.message.as_deref().unwrap();
        assert_eq!(extract_correlation_id(message), Some(id.as_str()));
        ids.push(id);
    });
    ids.dedup();
    assert_eq!(ids.len(), 3);

    let sent = t.sent.borrow();
    let fw = String::from_utf8(sent[1].2.clone()).unwrap();
    assert_eq!(
        fw,
        format!("<134>Aug  1 13:47:39 [TEST_UUID={}] fw1 PA: body two", ids[1])
    );
    let short = String::from_utf8(sent[2].2.clone()).unwrap();
    assert_eq!(short, format!("<13>too short [TEST_UUID={}]", ids[2]));
}

#[test]
fn port_and_host_overrides_apply() {
    let cat = synthetic();
    let t = Recorder::default();
    let cfg = ProbeConfig::builder()
        .host("collector.test")
        .port(Some(6000))
        .build();
    run(&cat, &Selection::All, &cfg, &t, |a| assert_eq!(a.port, 6000));
    assert!(
        t.sent
            .borrow()
            .iter()
            .all(|(h, p, _)| h == "collector.test" && *p == 6000)
    );
}

#[test]
fn builtin_catalog_over_real_udp() {
    let server = UdpSocket::bind("127.0.0.1:0").unwrap();
    server
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let port = server.local_addr().unwrap().port();
    let cfg = ProbeConfig::builder()
        .port(Some(port))
        .inject_uuid(true)
        .build();
    let cat = Catalog::builtin();
    let mut expected = Vec::new();
    let summary = run(&cat, &Selection::All, &cfg, &cfg.transport(), |a| {
        expected.push(a.message.clone().unwrap());
    });
    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.succeeded, 3);

    let mut buf = [0u8; 2048];
    for want in expected {
        let (n, _) = server.recv_from(&mut buf).unwrap();
        assert_eq!(std::str::from_utf8(&buf[..n]).unwrap(), want);
    }
}

#[test]
fn entry_named_all_is_an_ordinary_source() {
    let catalog = Catalog::from_templates([
        SourceTemplate::new("all", "<13>only me").port(5150),
        SourceTemplate::new("other", "<13>not me").port(5151),
    ])
    .unwrap();
    let rec = Recorder::default();
    let summary = run(
        &catalog,
        &Selection::One("all".into()),
        &ProbeConfig::default(),
        &rec,
        |_| {},
    );
    assert_eq!((summary.attempted, summary.succeeded), (1, 1));
    let sent = rec.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].2, b"<13>only me");
}
