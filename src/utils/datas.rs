//! Aritmética de períodos de reserva e aluguel

use chrono::{DateTime, Utc};

const SEGUNDOS_POR_DIA: i64 = 86_400;

/// Testa conflito entre dois períodos com limites inclusivos.
///
/// Dois períodos `[a1, a2]` e `[b1, b2]` conflitam quando qualquer
/// extremidade de um cai dentro do outro ou quando um contém o outro.
/// Períodos que apenas se tocam na fronteira contam como conflito.
pub fn periodos_conflitam(
    a_inicio: DateTime<Utc>,
    a_fim: DateTime<Utc>,
    b_inicio: DateTime<Utc>,
    b_fim: DateTime<Utc>,
) -> bool {
    (a_inicio <= b_inicio && a_fim >= b_inicio)
        || (a_inicio <= b_fim && a_fim >= b_fim)
        || (a_inicio >= b_inicio && a_fim <= b_fim)
}

/// Quantidade de diárias cobradas para um período: teto da duração em dias,
/// com mínimo de uma diária.
pub fn diarias_cobradas(inicio: DateTime<Utc>, fim: DateTime<Utc>) -> i64 {
    let segundos = (fim - inicio).num_seconds();
    let dias = (segundos + SEGUNDOS_POR_DIA - 1).div_euclid(SEGUNDOS_POR_DIA);
    dias.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn dia(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, d, 10, 0, 0).unwrap()
    }

    #[test]
    fn conflito_sobreposicao_parcial() {
        assert!(periodos_conflitam(dia(1), dia(5), dia(3), dia(8)));
        assert!(periodos_conflitam(dia(3), dia(8), dia(1), dia(5)));
    }

    #[test]
    fn conflito_contencao_nos_dois_sentidos() {
        // b dentro de a
        assert!(periodos_conflitam(dia(1), dia(10), dia(3), dia(5)));
        // a dentro de b
        assert!(periodos_conflitam(dia(3), dia(5), dia(1), dia(10)));
    }

    #[test]
    fn conflito_toque_na_fronteira() {
        // Fronteiras inclusivas: devolução e retirada no mesmo instante conflitam
        assert!(periodos_conflitam(dia(1), dia(5), dia(5), dia(8)));
        assert!(periodos_conflitam(dia(5), dia(8), dia(1), dia(5)));
    }

    #[test]
    fn sem_conflito_periodos_disjuntos() {
        assert!(!periodos_conflitam(dia(1), dia(3), dia(4), dia(8)));
        assert!(!periodos_conflitam(dia(10), dia(12), dia(4), dia(8)));
    }

    #[test]
    fn diarias_periodo_exato() {
        assert_eq!(diarias_cobradas(dia(1), dia(3)), 2);
        assert_eq!(diarias_cobradas(dia(3), dia(5)), 2);
    }

    #[test]
    fn diarias_arredonda_para_cima() {
        let inicio = dia(1);
        let fim = inicio + Duration::days(2) + Duration::hours(1);
        assert_eq!(diarias_cobradas(inicio, fim), 3);
    }

    #[test]
    fn diarias_minimo_de_uma() {
        let inicio = dia(1);
        assert_eq!(diarias_cobradas(inicio, inicio + Duration::hours(6)), 1);
    }
}
