use kurbo::{Point, Vec2};

use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::path::lexer::{Span, Token, TokenKind, lex_path};

/// One absolute path drawing command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point),
    /// `L x y`
    LineTo(Point),
    /// `C x1 y1 x2 y2 x y`
    CubicTo {
        /// First control point.
        ctrl1: Point,
        /// Second control point.
        ctrl2: Point,
        /// End point.
        to: Point,
    },
    /// `Q x1 y1 x y`
    QuadTo {
        /// Control point.
        ctrl: Point,
        /// End point.
        to: Point,
    },
    /// `A rx ry rotation large-arc sweep x y`. Flattened as a straight line.
    ArcTo {
        /// Ellipse radii.
        radii: Vec2,
        /// Ellipse x-axis rotation in degrees.
        x_axis_rotation: f64,
        /// Large-arc flag.
        large_arc: bool,
        /// Sweep flag.
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// `H x`
    HorizontalTo(f64),
    /// `V y`
    VerticalTo(f64),
    /// `Z`. Kept in the command list; sampling ignores it.
    ClosePath,
}

/// Command letters this parser understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandLetter {
    /// `M`
    Move,
    /// `L`
    Line,
    /// `C`
    Cubic,
    /// `Q`
    Quad,
    /// `A`
    Arc,
    /// `H`
    Horizontal,
    /// `V`
    Vertical,
    /// `Z`
    Close,
}

impl CommandLetter {
    /// Map a letter to a supported command. Only uppercase (absolute) letters are supported.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'M' => Self::Move,
            'L' => Self::Line,
            'C' => Self::Cubic,
            'Q' => Self::Quad,
            'A' => Self::Arc,
            'H' => Self::Horizontal,
            'V' => Self::Vertical,
            'Z' => Self::Close,
            _ => return None,
        })
    }

    /// The letter as written in path data.
    pub fn as_char(self) -> char {
        match self {
            Self::Move => 'M',
            Self::Line => 'L',
            Self::Cubic => 'C',
            Self::Quad => 'Q',
            Self::Arc => 'A',
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
            Self::Close => 'Z',
        }
    }

    /// Number of numeric arguments in one coordinate group.
    pub fn arity(self) -> usize {
        match self {
            Self::Move | Self::Line => 2,
            Self::Cubic => 6,
            Self::Quad => 4,
            Self::Arc => 7,
            Self::Horizontal | Self::Vertical => 1,
            Self::Close => 0,
        }
    }

    fn build(self, a: &[f64]) -> PathCommand {
        match self {
            Self::Move => PathCommand::MoveTo(Point::new(a[0], a[1])),
            Self::Line => PathCommand::LineTo(Point::new(a[0], a[1])),
            Self::Cubic => PathCommand::CubicTo {
                ctrl1: Point::new(a[0], a[1]),
                ctrl2: Point::new(a[2], a[3]),
                to: Point::new(a[4], a[5]),
            },
            Self::Quad => PathCommand::QuadTo {
                ctrl: Point::new(a[0], a[1]),
                to: Point::new(a[2], a[3]),
            },
            Self::Arc => PathCommand::ArcTo {
                radii: Vec2::new(a[0], a[1]),
                x_axis_rotation: a[2],
                large_arc: a[3] != 0.0,
                sweep: a[4] != 0.0,
                to: Point::new(a[5], a[6]),
            },
            Self::Horizontal => PathCommand::HorizontalTo(a[0]),
            Self::Vertical => PathCommand::VerticalTo(a[0]),
            Self::Close => PathCommand::ClosePath,
        }
    }
}

/// Parser state: which command a bare numeric group belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Current {
    Supported(CommandLetter),
    /// No argument-taking command is active (start of input, after `Z`, or an
    /// unknown letter); numbers are consumed and dropped.
    Skipping,
}

/// Parse path data into absolute commands.
///
/// A command letter stays current across repeated coordinate groups, so
/// `L 1 2 3 4` yields two `LineTo`s. Letters outside `M L C Q A H V Z` are
/// skipped along with any numbers that follow them, as are numbers before the
/// first command and after `Z`.
pub fn parse_path(src: &str) -> EpicycleResult<Vec<PathCommand>> {
    let tokens = lex_path(src)?;
    let mut p = Parser {
        src,
        tokens,
        pos: 0,
        current: Current::Skipping,
        out: Vec::new(),
    };
    p.run()?;
    Ok(p.out)
}

struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    current: Current,
    out: Vec<PathCommand>,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn run(&mut self) -> EpicycleResult<()> {
        while let Some(tok) = self.peek() {
            match tok.kind {
                TokenKind::Command(c) => {
                    self.pos += 1;
                    match CommandLetter::from_char(c) {
                        Some(CommandLetter::Close) => {
                            self.out.push(PathCommand::ClosePath);
                            self.current = Current::Skipping;
                        }
                        Some(letter) => {
                            self.current = Current::Supported(letter);
                            self.group(letter, tok.span)?;
                        }
                        None => {
                            tracing::debug!(
                                letter = %c,
                                offset = tok.span.start,
                                "skipping unsupported path command"
                            );
                            self.current = Current::Skipping;
                        }
                    }
                }
                TokenKind::Number(_) => match self.current {
                    Current::Skipping => {
                        tracing::trace!(offset = tok.span.start, "skipping stray number");
                        self.pos += 1;
                    }
                    Current::Supported(letter) => {
                        self.group(letter, tok.span)?;
                    }
                },
            }
        }
        Ok(())
    }

    /// Consume exactly one argument group for `letter`. Nothing is emitted unless
    /// the whole group is present.
    fn group(&mut self, letter: CommandLetter, anchor: Span) -> EpicycleResult<()> {
        let arity = letter.arity();
        let mut args = [0.0f64; 7];
        let mut end = anchor.end;
        for (found, slot) in args.iter_mut().take(arity).enumerate() {
            match self.peek() {
                Some(Token {
                    kind: TokenKind::Number(v),
                    span,
                }) => {
                    *slot = v;
                    end = span.end;
                    self.pos += 1;
                }
                _ => {
                    return Err(EpicycleError::parse(
                        anchor.start,
                        &self.src[anchor.start..end],
                        format!(
                            "command '{}' expects {arity} arguments, found {found}",
                            letter.as_char()
                        ),
                    ));
                }
            }
        }
        self.out.push(letter.build(&args[..arity]));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/command.rs"]
mod tests;
