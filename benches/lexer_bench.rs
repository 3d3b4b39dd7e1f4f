use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sicxe_lexer::Tokenizer;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sicxe lexer");

    let tokenizer = Tokenizer::new().unwrap();

    let line = "FIRST STL RETADR";
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_with_input(BenchmarkId::new("single line", line.len()), line, |b, i| {
        b.iter(|| {
            tokenizer.tokenize(black_box(i));
        });
    });

    let program = "COPY   START  0
FIRST  STL    RETADR
       LDB    #LENGTH
       BASE   LENGTH
CLOOP  +JSUB  RDREC
       LDA    LENGTH
       COMP   #0
       JEQ    ENDFIL
       +JSUB  WRREC
       J      CLOOP
ENDFIL LDA    =C'EOF'
       STA    BUFFER
       LDA    #3
       STA    LENGTH
       +JSUB  WRREC
       J      @RETADR
. subroutine to read record into buffer
RDREC  CLEAR  X
       CLEAR  A
       CLEAR  S
       +LDT   #4096
RLOOP  TD     INPUT
       JEQ    RLOOP
       RD     INPUT
       COMPR  A,S
       JEQ    EXIT
       STCH   BUFFER,X
       TIXR   T
       JLT    RLOOP
EXIT   STX    LENGTH
       RSUB
INPUT  BYTE   X'F1'
RETADR RESW   1
LENGTH RESW   1
BUFFER RESB   4096
       END    FIRST
";
    group.throughput(Throughput::Bytes(program.len() as u64));
    group.bench_with_input(BenchmarkId::new("program", program.len()), program, |b, i| {
        b.iter(|| {
            tokenizer.tokenize(black_box(i));
        });
    });

    let program_bytes = program.as_bytes();
    group.throughput(Throughput::Bytes(program_bytes.len() as u64));
    group.bench_with_input(BenchmarkId::new("program bytes", program_bytes.len()), program_bytes, |b, i| {
        b.iter(|| {
            tokenizer.tokenize_bytes(black_box(i)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
