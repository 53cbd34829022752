// crates/catalog/src/builtin.rs

use crate::{DEFAULT_PORT, SourceTemplate};

pub(crate) fn templates() -> Vec<SourceTemplate> {
    vec![
        SourceTemplate::new(
            "cisco-router",
            "<134>1 2025-08-01T13:47:39.000Z router01 ospf 23456 LINK-STATE [exampleSDID@32473 iut=\"2\" eventSource=\"cisco\"] %OSPF-5-ADJCHG: Process 1, Nbr 192.168.1.100 on GigabitEthernet0/1 from LOADING to FULL, Loading Done",
        )
        .description("Cisco Router (hostname=router01) - RFC 5424")
        .expected_parser("ciscoRouter2")
        .port(DEFAULT_PORT),
        SourceTemplate::new(
            "palo-alto",
            "<134>Aug  1 13:47:39 firewall01 PA-220-PA-220: THREAT: virus detected from 192.168.1.10 to 203.0.113.5, action=reset-both, file=malicious_file.exe",
        )
        .description("Palo Alto Firewall (appname=PA-220-PA-220) - RFC 3164")
        .expected_parser("paloAltoFirewall")
        .port(DEFAULT_PORT),
        SourceTemplate::new(
            "cisco-firewall",
            "<134>1 2025-08-01T13:47:39.000Z docker-desktop firewall4 12345 INTF-ALERT [exampleSDID@32473 iut=\"3\" eventSource=\"cisco\"] %ASA-4-313001: Built inbound TCP connection for faddr 10.20.30.40/12345 gaddr 192.168.1.1/80 laddr 172.16.0.2/443",
        )
        .description("Cisco Firewall (hostname=docker-desktop) - RFC 5424")
        .expected_parser("ciscoFirewall2")
        .port(DEFAULT_PORT),
    ]
}
