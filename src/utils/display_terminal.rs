//! 터미널 출력 포맷팅 유틸리티
//!
//! 레지스트리 초기화와 부트스트랩 데이터 적재 과정을 터미널에 표시합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태의 제목을 출력합니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║         🔄 INITIALIZING SERVICE REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("╔{}╗", "═".repeat(BOX_WIDTH));
    println!("║{}║", center(title, BOX_WIDTH - 1));
    println!("╚{}╝", "═".repeat(BOX_WIDTH));
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

/// 부트스트랩 결과 요약을 출력합니다.
pub fn print_bootstrap_summary(beers: u64, customers: u64) {
    println!();
    print_boxed_title("🍺 SAMPLE DATA READY");
    println!("   🍺 Beers: {}", beers);
    println!("   👤 Customers: {}", customers);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
