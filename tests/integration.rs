use std::str::from_utf8;

use bank_ledger::bin_utils::Service;

const TEST_FILE: &str = include_str!("scenarios.csv");

#[test]
fn process_scenarios() {
    let mut output = Vec::new();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
    };
    service.run().unwrap();

    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        vec![
            "line,owner,balance,outcome",
            "2,John,100,ok",
            "3,Pepe,50,ok",
            "4,Maria,0,ok",
            "5,Pepa,10,ok",
            "6,Luca,50,ok",
            "7,Cata,0.12345,ok",
            "8,Andres,1000.12345,Insufficient funds",
            "9,Andres,1100.12345,ok",
            "10,Andres,-499.87655,ok",
            "11,Big,100000000000000000000.0000000001,ok",
        ]
    );
}

#[test]
fn malformed_amount_aborts() {
    let input = "op,owner,balance,amount\ndebit,John,200,1O0\n";
    let mut output = Vec::new();
    let err = Service {
        input: input.as_bytes(),
        output: &mut output,
    }
    .run()
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid amount at line 2");
}
