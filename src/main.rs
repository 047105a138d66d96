//! Reads GCJ-02 points, one `"<lon>,<lat>"` per line, from the arguments or
//! from stdin, and prints them converted to WGS-84.

use std::{
    io::{self, BufRead, BufWriter, Write},
    process::ExitCode,
};

use gcjconvert::{Error, GeoPoint, ParseCoord};

fn convert_line(line: &str) -> Result<GeoPoint, Error> {
    GeoPoint::parse_coord(line).map(|point| point.gcj02_to_wgs84())
}

fn run<I>(lines: I, out: &mut impl Write) -> io::Result<usize>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut failed = 0;

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match convert_line(line) {
            Ok(point) => writeln!(out, "{point}")?,
            Err(e) => {
                eprintln!("line {}: {e}", idx + 1);
                failed += 1;
            }
        }
    }

    Ok(failed)
}

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = if args.is_empty() {
        run(io::stdin().lock().lines(), &mut out)
    } else {
        run(args.into_iter().map(Ok), &mut out)
    };

    match result.and_then(|failed| out.flush().map(|()| failed)) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("gcj2wgs: {e}");
            ExitCode::FAILURE
        }
    }
}
