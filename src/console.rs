//! Interactive console menu over a local catalog
//!
//! The console owns its own [`BookCatalog`]; it never talks to the HTTP
//! server. Input and output are generic so the loop can be driven from
//! in-memory buffers.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use crate::{catalog::BookCatalog, models::book::NewBook};

const RULE_WIDTH: usize = 40;

/// `Break` means the input ended while a prompt was waiting
type Step = io::Result<ControlFlow<()>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Search,
    Delete,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    catalog: BookCatalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(catalog: BookCatalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    /// Run the menu loop until the user exits or the input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Pilih menu (1-5): ")? else {
                return self.interrupted();
            };

            let step = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add_book()?,
                Some(MenuChoice::List) => {
                    self.list_books()?;
                    ControlFlow::Continue(())
                }
                Some(MenuChoice::Search) => self.search_books()?,
                Some(MenuChoice::Delete) => self.delete_book()?,
                Some(MenuChoice::Exit) => {
                    writeln!(
                        self.output,
                        "Terima kasih telah menggunakan Sistem Manajemen Buku!"
                    )?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Pilihan tidak valid! Pilih 1-5.")?;
                    ControlFlow::Continue(())
                }
            };

            if step.is_break() {
                return self.interrupted();
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "      SISTEM MANAJEMEN BUKU")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "1. Tambah Buku")?;
        writeln!(self.output, "2. Tampilkan Semua Buku")?;
        writeln!(self.output, "3. Cari Buku")?;
        writeln!(self.output, "4. Hapus Buku")?;
        writeln!(self.output, "5. Keluar")?;
        writeln!(self.output, "{}", rule)
    }

    /// Print `text`, read one line and trim it. `None` at end of input.
    /// Bytes that are not valid UTF-8 are replaced, so they fail
    /// validation like any other bad entry.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn interrupted(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n\nProgram dihentikan oleh user.")
    }

    fn add_book(&mut self) -> Step {
        writeln!(self.output, "\n--- TAMBAH BUKU ---")?;
        let Some(title) = self.prompt("Masukkan judul buku: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(author) = self.prompt("Masukkan nama pengarang: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let year = loop {
            let Some(line) = self.prompt("Masukkan tahun terbit: ")? else {
                return Ok(ControlFlow::Break(()));
            };
            match line.parse::<i32>() {
                Ok(year) => break year,
                Err(_) => writeln!(self.output, "Tahun harus berupa angka!")?,
            }
        };

        if title.is_empty() || author.is_empty() {
            writeln!(self.output, "Judul dan pengarang tidak boleh kosong!")?;
            return Ok(ControlFlow::Continue(()));
        }

        let book = self.catalog.add(NewBook::new(title, author, year));
        tracing::debug!("Console: added book id={}", book.id);
        writeln!(self.output, "✓ Buku '{}' berhasil ditambahkan!", book.title)?;
        Ok(ControlFlow::Continue(()))
    }

    fn list_books(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return writeln!(self.output, "Tidak ada buku dalam koleksi.");
        }

        writeln!(self.output, "\n=== DAFTAR BUKU ===")?;
        for book in self.catalog.books() {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    fn search_books(&mut self) -> Step {
        writeln!(self.output, "\n--- CARI BUKU ---")?;
        let Some(keyword) = self.prompt("Masukkan kata kunci (judul/pengarang): ")? else {
            return Ok(ControlFlow::Break(()));
        };

        if keyword.is_empty() {
            writeln!(self.output, "Kata kunci tidak boleh kosong!")?;
            return Ok(ControlFlow::Continue(()));
        }

        let hits = self.catalog.search(&keyword);
        if hits.is_empty() {
            writeln!(
                self.output,
                "Tidak ditemukan buku dengan kata kunci '{}'",
                keyword
            )?;
        } else {
            writeln!(self.output, "\n=== HASIL PENCARIAN '{}' ===", keyword)?;
            for book in hits {
                writeln!(self.output, "{}", book)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn delete_book(&mut self) -> Step {
        writeln!(self.output, "\n--- HAPUS BUKU ---")?;
        self.list_books()?;

        let Some(line) = self.prompt("Masukkan ID buku yang akan dihapus: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(id) = parse_id(&line) else {
            writeln!(self.output, "ID harus berupa angka!")?;
            return Ok(ControlFlow::Continue(()));
        };

        // Negative or oversized ids are numbers but can never match a book
        let removed = id.parse::<u64>().ok().and_then(|id| self.catalog.remove(id));
        match removed {
            Some(book) => {
                tracing::debug!("Console: removed book id={}", book.id);
                writeln!(self.output, "✓ Buku '{}' berhasil dihapus!", book.title)?;
            }
            None => writeln!(self.output, "Buku dengan ID {} tidak ditemukan.", id)?,
        }
        Ok(ControlFlow::Continue(()))
    }
}

/// Accept any optionally signed run of decimal digits, whatever its size.
/// Returns the number without a leading `+`.
fn parse_id(line: &str) -> Option<&str> {
    let digits = line.strip_prefix(['+', '-']).unwrap_or(line);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(line.strip_prefix('+').unwrap_or(line))
}
