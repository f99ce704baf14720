use std::io::{self, Write};

use colored::Colorize;

use crate::printer::TreeStats;

pub fn print_tree_summary<W: Write>(writer: &mut W, stats: &TreeStats) -> io::Result<()> {
    let directories = if stats.directories == 1 { "directory" } else { "directories" };
    let files = if stats.files == 1 { "file" } else { "files" };
    writeln!(
        writer,
        "\n{} {}, {} {}",
        stats.directories.to_string().cyan(),
        directories,
        stats.files.to_string().cyan(),
        files
    )?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(stats: TreeStats) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        print_tree_summary(&mut buf, &stats).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_pluralizes() {
        assert_eq!(render(TreeStats { directories: 3, files: 5 }), "\n3 directories, 5 files\n");
        assert_eq!(render(TreeStats { directories: 1, files: 1 }), "\n1 directory, 1 file\n");
        assert_eq!(render(TreeStats::default()), "\n0 directories, 0 files\n");
    }
}
