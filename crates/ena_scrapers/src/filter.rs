use ena_core::HeadlineCandidate;

/// Terms that mark a headline as being about the economy.
pub const ECONOMIC_KEYWORDS: [&str; 30] = [
    "economia",
    "econômico",
    "pib",
    "inflação",
    "selic",
    "dólar",
    "real",
    "mercado",
    "bolsa",
    "investimento",
    "banco",
    "juros",
    "fiscal",
    "orçamento",
    "imposto",
    "exportação",
    "desemprego",
    "emprego",
    "renda",
    "consumo",
    "varejo",
    "indústria",
    "agronegócio",
    "petróleo",
    "financeiro",
    "crise",
    "recessão",
    "crescimento",
    "lucro",
    "prejuízo",
];

pub const DEFAULT_MAX_RELEVANT: usize = 8;

pub fn is_economic(title: &str) -> bool {
    let lowered = title.to_lowercase();
    ECONOMIC_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// Keep the first `max` economy headlines, in their original order.
pub fn filter_economic(candidates: Vec<HeadlineCandidate>, max: usize) -> Vec<HeadlineCandidate> {
    candidates
        .into_iter()
        .filter(|c| is_economic(&c.title))
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, n: usize) -> HeadlineCandidate {
        HeadlineCandidate::new(title, format!("https://www.globo.com/noticia/{}", n))
    }

    #[test]
    fn test_caps_and_preserves_order() {
        let mut candidates = Vec::new();
        for n in 0..12 {
            candidates.push(candidate(&format!("Inflação de serviços acelera em março, parte {}", n), n));
            candidates.push(candidate("Time vence clássico no fim de semana", 100 + n));
        }

        let kept = filter_economic(candidates, DEFAULT_MAX_RELEVANT);
        assert_eq!(kept.len(), 8);
        for (i, c) in kept.iter().enumerate() {
            assert_eq!(c.link, format!("https://www.globo.com/noticia/{}", i));
        }
    }

    #[test]
    fn test_fewer_than_cap_keeps_all_matches() {
        let candidates = vec![
            candidate("Bolsa de valores fecha em alta nesta sexta", 1),
            candidate("Novela estreia nova temporada em horário nobre", 2),
            candidate("SELIC deve ficar estável, diz relatório", 3),
        ];
        let kept = filter_economic(candidates, DEFAULT_MAX_RELEVANT);
        let links: Vec<_> = kept.iter().map(|c| c.link.as_str()).collect();
        assert_eq!(
            links,
            vec!["https://www.globo.com/noticia/1", "https://www.globo.com/noticia/3"]
        );
    }

    #[test]
    fn test_keywords_match_inside_words() {
        assert!(is_economic("Governo anuncia realinhamento de tarifas"));
        assert!(is_economic("Empregos formais somam 8 milhões"));
        assert!(!is_economic("Chuva forte atinge o litoral paulista"));
    }
}
