use pretty_assertions::assert_eq;
use sicxe_lexer::{Lexer, OperationTable, TokenKind};

fn run(text: &str) -> Vec<(TokenKind, String)> {
    let optab = OperationTable::build().unwrap();
    let mut lexer = Lexer::new(text, &optab);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push((token.kind, token.text));
        if done {
            break;
        }
    }
    tokens
}

fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|(kind, text)| (*kind, (*text).to_owned())).collect()
}

#[test]
fn instruction_with_operand() {
    assert_eq!(
        run("LDA  BUFFER\n"),
        expected(&[
            (TokenKind::Instruction, "LDA"),
            (TokenKind::Symbol, "BUFFER"),
            (TokenKind::NewLine, "\n"),
            (TokenKind::EndOfInput, ""),
        ])
    );
}

#[test]
fn reserve_words() {
    assert_eq!(
        run("RESW 1\n"),
        expected(&[
            (TokenKind::Directive, "RESW"),
            (TokenKind::Number, "1"),
            (TokenKind::NewLine, "\n"),
            (TokenKind::EndOfInput, ""),
        ])
    );
}

#[test]
fn comment_line() {
    assert_eq!(
        run(".this is a comment\n"),
        expected(&[
            (TokenKind::Comment, ".this is a comment"),
            (TokenKind::NewLine, "\n"),
            (TokenKind::EndOfInput, ""),
        ])
    );
}

#[test]
fn immediate_operand() {
    assert_eq!(
        run("#5"),
        expected(&[(TokenKind::Hash, "#"), (TokenKind::Number, "5"), (TokenKind::EndOfInput, "")])
    );
}

#[test]
fn unrecognized_character() {
    assert_eq!(
        run("&foo"),
        expected(&[(TokenKind::Invalid, "&"), (TokenKind::Symbol, "foo"), (TokenKind::EndOfInput, "")])
    );
}

#[test]
fn tokenizer_matches_lexer() {
    let tokenizer = sicxe_lexer::Tokenizer::new().unwrap();
    let source = "COPY START 0\n+JSUB @RDREC\nBUFFER RESB 4096\nEND FIRST\n";
    let tokens = tokenizer.tokenize(source);
    let from_lexer = run(source);
    assert_eq!(tokens.len() + 1, from_lexer.len());
    for (token, (kind, text)) in tokens.iter().zip(&from_lexer) {
        assert_eq!(token.kind, *kind);
        assert_eq!(&token.text, text);
    }
}
