// Test complete flow of the application
// Run with `cargo test --test e2e_test`

use std::fs;

use hlscan::{encode, LanguageDefinition, ScannerBuilder, SourceBuffer, Token, REST_OF_INPUT};
use regex::Regex;

#[test]
fn e2e_test() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    // Initialize the regex for newlines. It is used to make the tests platform independent.
    let rx_newline: Regex = Regex::new(r"\r?\n|\r").unwrap();

    // Iterate over all json files in the data directory that contain language definitions
    for entry in fs::read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data")).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().unwrap() != "json" {
            continue;
        }

        println!("--------------------------------------------------");
        println!("Entry: {:?}", entry.file_name());
        println!("--------------------------------------------------");

        // Read the json file
        let file = fs::File::open(&path).unwrap();
        let definition = LanguageDefinition::from_reader(file)
            .unwrap_or_else(|e| panic!("**** Failed to read json file {}: {}", path.display(), e));

        // Create a scanner from the scanner builder
        let scanner = ScannerBuilder::new()
            .definition(definition)
            .build()
            .unwrap();

        // Open the input file which has the same base name as the json file but with a .input
        // extension.
        let input_path = path.with_extension("input");
        let input = fs::read_to_string(&input_path).unwrap();
        let input = rx_newline.replace_all(&input, "\n");
        let source = SourceBuffer::from(&*input);

        // Scan the input
        let token_buffer = scanner.tokenize(&source).unwrap();
        let tokens: Vec<Token> = token_buffer.iter().copied().collect();

        println!("Tokens:\n{}\n", token_buffer);
        for token in &tokens {
            println!("{}, Kind: {} ", &input[token.range()], token.kind());
        }
        println!("Tokens count: {}", tokens.len());

        // Open the expected output file which has the same base name as the json file but with a
        // .tokens extension.
        let token_file_path = path.with_extension("tokens");
        let token_file = fs::File::open(&token_file_path).unwrap();
        let expected_tokens: Vec<Token> = serde_json::from_reader(&token_file).unwrap();

        // Compare the tokens
        assert_eq!(tokens, expected_tokens);

        // The runs must cover the whole input without gaps
        let runs = encode(&token_buffer);
        let total: usize = runs.iter().map(|run| run.length).sum();
        assert_eq!(total, REST_OF_INPUT);
        let mut offset = 0;
        for span in runs.spans(input.len()) {
            assert_eq!(span.range.start, offset);
            offset = span.range.end;
        }
        assert_eq!(offset, input.len());
    }
}
