mod collapse_long_unchanged_runs_unless_expanded;
mod compare_identical_files_reports_no_changes;
mod compare_against_missing_file_uses_dev_null;
mod compare_generated_files_with_appended_line;
mod fail_when_both_files_are_missing;
mod show_side_by_side_diff_with_truncated_lines;
mod show_stat_without_merging_replacements;
mod show_unified_diff_with_merged_replacements;
