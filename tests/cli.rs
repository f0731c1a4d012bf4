use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

const VALID_HUB: &str = r#"{
    "chainId": "dymension-1",
    "chainName": "Dymension",
    "rpc": "https://rpc.example.com",
    "rest": ["https://api.example.com"],
    "coinType": 118,
    "currencies": [
        {"displayDenom": "DYM", "baseDenom": "adym", "decimals": 18, "type": "main"}
    ],
    "type": "Hub"
}"#;

fn chainreg() -> Command {
    Command::cargo_bin("chainreg").unwrap()
}

/// A registry with all four tier directories present and one valid chain
/// in mainnet.
fn valid_registry() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("mainnet/dymension/dymension.json")
        .write_str(VALID_HUB)
        .unwrap();
    for tier in ["testnet", "devnet", "internal-devnet"] {
        temp.child(tier).create_dir_all().unwrap();
    }
    temp
}

fn write_chain(temp: &TempDir, tier: &str, name: &str, json: &str) {
    temp.child(format!("{tier}/{name}/{name}.json"))
        .write_str(json)
        .unwrap();
}

#[test]
fn valid_registry_passes() {
    let temp = valid_registry();
    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Going to validate mainnet testnet devnet internal-devnet")
                .and(predicate::str::contains("Validating group Mainnet ..."))
                .and(predicate::str::contains("Validating group Internal Devnet ..."))
                .and(predicate::str::contains("Passed!")),
        );
}

#[test]
fn validate_alias_v_works() {
    let temp = valid_registry();
    chainreg()
        .arg("v")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Passed!"));
}

#[test]
fn missing_repo_dir_fails() {
    chainreg()
        .args(["validate", "/no/such/registry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERR:"));
}

#[test]
fn missing_tier_directory_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    temp.child("mainnet/dymension/dymension.json")
        .write_str(VALID_HUB)
        .unwrap();
    // no testnet/devnet/internal-devnet directories

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required directory testnet",
        ));
}

#[test]
fn tier_flag_narrows_the_run() {
    let temp = TempDir::new().unwrap();
    temp.child("mainnet/dymension/dymension.json")
        .write_str(VALID_HUB)
        .unwrap();
    // other tiers missing entirely, but only mainnet is requested

    chainreg()
        .args(["validate", "--mainnet"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Going to validate mainnet\n")
                .and(predicate::str::contains("Passed!")),
        );
}

#[test]
fn violations_are_reported_with_context_and_counted() {
    let temp = valid_registry();
    let bad = VALID_HUB.replace("\"Dymension\"", "\" Dymension\"");
    write_chain(&temp, "testnet", "froopyland", &bad);

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("ERR: [group:Testnet] [chain:froopyland] Validation failed!")
                .and(predicate::str::contains("Bad chain name"))
                .and(predicate::str::contains("froopyland.json"))
                .and(predicate::str::contains("Total 1 issues found!")),
        )
        .stdout(predicate::str::contains("Passed!").not());
}

#[test]
fn duplicate_chain_id_within_a_tier_is_rejected() {
    let temp = valid_registry();
    write_chain(&temp, "mainnet", "dymension-copy", VALID_HUB);

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains(
                "Duplicated chain id found: dymension-1 in dymension and dymension-copy",
            )
            .and(predicate::str::contains("Total 1 issues found!")),
        );
}

#[test]
fn same_chain_id_across_tiers_is_accepted() {
    let temp = valid_registry();
    write_chain(&temp, "testnet", "dymension", VALID_HUB);

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Passed!"));
}

#[test]
fn stop_on_error_reports_exactly_one_violation() {
    let temp = valid_registry();
    let bad = VALID_HUB.replace("\"Dymension\"", "\" Dymension\"");
    write_chain(&temp, "mainnet", "aaa", &bad.replace("dymension-1", "aaa-1"));
    write_chain(&temp, "mainnet", "bbb", &bad.replace("dymension-1", "bbb-1"));

    chainreg()
        .args(["validate", "-e"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation failed!").count(1));
}

#[test]
fn malformed_record_aborts_only_its_tier() {
    let temp = valid_registry();
    // lexical order within mainnet: "aaa" breaks the scan before "zzz"
    write_chain(&temp, "mainnet", "aaa", "{ not json");
    let bad_name = VALID_HUB
        .replace("dymension-1", "zzz-1")
        .replace("\"Dymension\"", "\" Dymension\"");
    write_chain(&temp, "mainnet", "zzz", &bad_name);
    let bad_testnet = VALID_HUB
        .replace("dymension-1", "froopyland-1")
        .replace("\"Dymension\"", "\" Froopyland\"");
    write_chain(&temp, "testnet", "froopyland", &bad_testnet);

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to decode chain record file")
                .and(predicate::str::contains("[chain:froopyland]"))
                .and(predicate::str::contains("[chain:zzz]").not())
                .and(predicate::str::contains("Total 2 issues found!")),
        );
}

#[test]
fn missing_record_file_is_reported() {
    let temp = valid_registry();
    temp.child("mainnet/ghost").create_dir_all().unwrap();

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Missing required file")
                .and(predicate::str::contains("ghost.json")),
        );
}

#[test]
fn evm_chain_id_mismatch_is_reported() {
    let temp = valid_registry();
    let evm_chain = r#"{
        "chainId": "dym_1100-1",
        "chainName": "Dymension EVM",
        "rpc": "https://rpc.example.com",
        "bech32Prefix": "dym",
        "da": "Celestia",
        "type": "RollApp",
        "coinType": 60,
        "evm": {"chainId": "0x44d", "rpc": "https://evm.example.com"},
        "currencies": [
            {"displayDenom": "DYM", "baseDenom": "adym", "decimals": 18, "type": "main"}
        ]
    }"#;
    write_chain(&temp, "devnet", "dymevm", evm_chain);

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Bad EVM hex chain id")
                .and(predicate::str::contains("must match with the chain id")),
        );
}

#[test]
fn badly_typed_rpc_still_runs_the_rest_of_the_battery() {
    let temp = valid_registry();
    let broken = VALID_HUB
        .replace("dymension-1", "broken-1")
        .replace("\"https://rpc.example.com\"", "12345")
        .replace("\"Dymension\"", "\" Broken\"");
    write_chain(&temp, "testnet", "broken", &broken);

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to get RPC urls: url must be string or list of strings, got number")
                .and(predicate::str::contains("Bad chain name"))
                .and(predicate::str::contains("Total 2 issues found!")),
        );
}

#[test]
fn additional_chain_types_flag_extends_the_allow_list() {
    let temp = valid_registry();
    let bespoke = VALID_HUB
        .replace("dymension-1", "bespoke-1")
        .replace("\"Hub\"", "\"Bespoke\"");
    write_chain(&temp, "devnet", "bespoke", &bespoke);

    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Bad chain type"));

    chainreg()
        .args(["validate", "--addition-chain-types-allowed", "Bespoke"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Passed!"));
}

#[test]
fn logo_files_are_resolved_relative_to_the_chain_directory() {
    let temp = valid_registry();
    let with_logo = VALID_HUB
        .replace("dymension-1", "logochain-1")
        .replace("\"type\": \"Hub\"", "\"logo\": \"logo.png\", \"type\": \"Hub\"");
    write_chain(&temp, "devnet", "logochain", &with_logo);

    // missing logo file
    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("logo file not found"));

    temp.child("devnet/logochain/logo.png")
        .write_binary(b"png")
        .unwrap();
    chainreg()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .success();
}
